use crate::scene::SceneNode;

/// Named node lookup on a scene owned by the host
pub trait SceneGraph {
    fn node(&self, name: &str) -> Option<&SceneNode>;

    fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode>;

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
