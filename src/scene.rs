use glam::Vec3;
use log::debug;

use crate::traits::SceneGraph;

pub const SCENE_NAME: &str = "MainScene";
pub const AUX_LIGHT: &str = "AuxLight";

/// What a node stands for; drawing it is the host's business
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Ambient colour and fog settings for the whole scene
    Zone { ambient: [f32; 3], fog_color: [f32; 3], fog_start: f32, fog_end: f32 },
    DirectionalLight { direction: Vec3, color: [f32; 3] },
    PointLight { range: f32, color: [f32; 3] },
    Box { size: Vec3, color: [f32; 3] },
    Skybox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub position: Vec3,
    pub enabled: bool,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind, position: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            enabled: true,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::DirectionalLight { .. } | NodeKind::PointLight { .. }
        )
    }
}

/// Flat list of named nodes making up the demo scene
#[derive(Debug, Clone, Default)]
pub struct Scene {
    name: String,
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Boxes on a floor, a sun, one toggleable point light and a skybox
    pub fn demo() -> Self {
        let mut scene = Self::new(SCENE_NAME);

        scene.add(SceneNode::new(
            "Zone",
            NodeKind::Zone {
                ambient: [0.15, 0.15, 0.15],
                fog_color: [0.5, 0.5, 0.7],
                fog_start: 100.0,
                fog_end: 300.0,
            },
            Vec3::ZERO,
        ));
        scene.add(SceneNode::new(
            "Sun",
            NodeKind::DirectionalLight {
                direction: Vec3::new(0.6, -1.0, 0.8).normalize(),
                color: [1.0, 0.95, 0.85],
            },
            Vec3::ZERO,
        ));
        scene.add(SceneNode::new(
            AUX_LIGHT,
            NodeKind::PointLight {
                range: 25.0,
                color: [1.0, 0.6, 0.2],
            },
            Vec3::new(0.0, 6.0, 0.0),
        ));
        scene.add(SceneNode::new(
            "Floor",
            NodeKind::Box {
                size: Vec3::new(100.0, 1.0, 100.0),
                color: [0.35, 0.35, 0.35],
            },
            Vec3::new(0.0, -0.5, 0.0),
        ));

        for i in 0..5 {
            let x = (i as f32 - 2.0) * 4.0;
            let height = 1.0 + i as f32;
            scene.add(SceneNode::new(
                format!("Box{}", i),
                NodeKind::Box {
                    size: Vec3::new(2.0, height, 2.0),
                    color: [0.2 + 0.15 * i as f32, 0.4, 0.8 - 0.1 * i as f32],
                },
                Vec3::new(x, height * 0.5, 0.0),
            ));
        }

        scene.add(SceneNode::new("Sky", NodeKind::Skybox, Vec3::ZERO));

        debug!("Scene {} built with {} nodes", scene.name, scene.nodes.len());
        scene
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Copy of the scene with the named node removed
    pub fn without(mut self, name: &str) -> Self {
        self.nodes.retain(|n| n.name != name);
        self
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fog colour of the first zone, used as the clear colour
    pub fn fog_color(&self) -> [f32; 3] {
        self.nodes
            .iter()
            .find_map(|n| match n.kind {
                NodeKind::Zone { fog_color, .. } if n.enabled => Some(fog_color),
                _ => None,
            })
            .unwrap_or([0.0, 0.0, 0.0])
    }

    pub fn enabled_lights(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_light() && n.enabled).count()
    }
}

impl SceneGraph for Scene {
    fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
