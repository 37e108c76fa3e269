// portfolio.rs - The portfolio page's scene, views and button wiring
use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::camera::{Camera, DESKTOP_FOV_DEGREES, MOBILE_FOV_DEGREES};
use crate::config::RigConfig;
use crate::motion::{MotionController, MotionError, PresetTable, ViewPreset};
use crate::picking::{HitRouter, PointerClick};
use crate::scene::{Mesh, NodeId, SceneError, SceneGraph, Transform};

pub const DEFAULT_VIEW: &str = "default";
pub const BUILDING_VIEW: &str = "building";
pub const PHOTO_CLOSEUP_VIEW: &str = "photoCloseup";
pub const SCREEN_VIEW: &str = "screenView";

pub const START_POSITION: Vec3 = Vec3::new(0.0, 7.0, 0.0);

const STAR_RADIUS: f32 = 0.25;
const STAR_SPREAD: f32 = 100.0;

/// Built-in camera views of the page
pub fn portfolio_presets() -> PresetTable {
    [
        (DEFAULT_VIEW, ViewPreset::new(START_POSITION, Vec3::new(0.0, 7.0, -2.0))),
        (BUILDING_VIEW, ViewPreset::new(Vec3::new(0.0, 7.0, 5.0), Vec3::new(0.0, 6.0, 0.0))),
        (PHOTO_CLOSEUP_VIEW, ViewPreset::new(Vec3::new(0.0, 6.5, 1.0), Vec3::new(0.0, 6.5, 0.0))),
        (SCREEN_VIEW, ViewPreset::new(Vec3::new(0.0, 7.3, 20.0), Vec3::new(0.0, 7.0, -1.0))),
    ]
    .into_iter()
    .collect()
}

/// Content panels the hitboxes on the screen open
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Section {
    AboutMe,
    Skills,
}

/// What clicking a scene button asks the page to do
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonAction {
    FlyTo(String),
    FlyToPoint { position: Vec3, look_at: Vec3 },
    Reveal(Section),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PortfolioOptions {
    /// Wider field of view and half the stars, as on phones
    pub mobile: bool,
    pub star_seed: u64,
}

impl PortfolioOptions {
    pub fn star_count(&self) -> usize {
        if self.mobile { 100 } else { 200 }
    }

    pub fn fov_degrees(&self) -> f32 {
        if self.mobile { MOBILE_FOV_DEGREES } else { DESKTOP_FOV_DEGREES }
    }
}

/// Handles to the interesting nodes of the portfolio scene
#[derive(Clone, Debug)]
pub struct PortfolioNodes {
    pub building: NodeId,
    pub photo_frame: NodeId,
    pub screen: NodeId,
    pub about_me: NodeId,
    pub skills: NodeId,
    pub stars: Vec<NodeId>,
}

/// Build the page's scene graph. Geometry is reduced to pickable volumes.
pub fn build_scene(options: &PortfolioOptions) -> Result<(SceneGraph, PortfolioNodes), SceneError> {
    let mut scene = SceneGraph::new();

    let building = add_building(&mut scene)?;

    let photo_frame = add_photo_frame(
        &mut scene,
        Transform::from_translation(Vec3::new(0.2, 6.9, -0.25)).with_euler(0.0, -0.2, 0.0),
    )?;

    // The big screen is a scaled copy of the photo frame
    let screen = scene.clone_subtree(photo_frame, None)?;
    scene.set_name(screen, "PhotoFrameScreen")?;
    scene.set_transform(
        screen,
        Transform::from_translation(Vec3::new(0.0, 7.0, 19.0)).with_scale(Vec3::new(7.0, 4.0, 1.0)),
    )?;

    let hitbox = Mesh::cuboid(Vec3::new(2.0, 0.5, 0.1));
    let about_me = scene.add_node(
        "HitBoxAboutMe",
        Transform::from_translation(Vec3::new(0.0, 7.5, 19.05)),
        Some(hitbox.clone()),
        None,
    )?;
    let skills = scene.add_node(
        "HitBoxSkills",
        Transform::from_translation(Vec3::new(0.0, 7.0, 19.05)),
        Some(hitbox),
        None,
    )?;

    let stars = star_positions(options.star_count(), options.star_seed)
        .into_iter()
        .map(|p| scene.add_node("Star", Transform::from_translation(p), Some(Mesh::sphere(STAR_RADIUS)), None))
        .collect::<Result<Vec<_>, _>>()?;

    scene.update_world_matrices();

    Ok((
        scene,
        PortfolioNodes {
            building,
            photo_frame,
            screen,
            about_me,
            skills,
            stars,
        },
    ))
}

fn add_building(scene: &mut SceneGraph) -> Result<NodeId, SceneError> {
    let building = scene.add_node("DoricBuilding", Transform::default(), None, None)?;

    scene.add_node(
        "Stylobate",
        Transform::from_translation(Vec3::new(0.0, 5.25, 0.0)),
        Some(Mesh::cuboid(Vec3::new(16.0, 0.5, 16.0))),
        Some(building),
    )?;
    scene.add_node(
        "Entablature",
        Transform::from_translation(Vec3::new(0.0, 11.9, 0.0)),
        Some(Mesh::cuboid(Vec3::new(16.0, 0.8, 16.0))),
        Some(building),
    )?;

    let colonnade = scene.add_node("Colonnade", Transform::default(), None, Some(building))?;
    for x in [-6.0, 6.0] {
        for z in [-6.0, -2.0, 2.0, 6.0] {
            scene.add_node(
                "Column",
                Transform::from_translation(Vec3::new(x, 8.5, z)),
                Some(Mesh::cuboid(Vec3::new(0.6, 6.0, 0.6))),
                Some(colonnade),
            )?;
        }
    }

    Ok(building)
}

fn add_photo_frame(scene: &mut SceneGraph, transform: Transform) -> Result<NodeId, SceneError> {
    let frame = scene.add_node("PhotoFrame", transform, None, None)?;
    scene.add_node(
        "Frame",
        Transform::default(),
        Some(Mesh::cuboid(Vec3::new(0.5, 0.4, 0.04))),
        Some(frame),
    )?;
    scene.add_node(
        "Picture",
        Transform::from_translation(Vec3::new(0.0, 0.0, 0.021)),
        Some(Mesh::quad(0.44, 0.34)),
        Some(frame),
    )?;
    Ok(frame)
}

/// Seeded star positions spread uniformly over a cube of side `STAR_SPREAD`
fn star_positions(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = STAR_SPREAD * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

/// Button wiring of the page
pub fn register_buttons(router: &mut HitRouter<ButtonAction>, nodes: &PortfolioNodes) {
    router.register(nodes.building, ButtonAction::FlyTo(DEFAULT_VIEW.to_string()));
    router.register(nodes.photo_frame, ButtonAction::FlyTo(SCREEN_VIEW.to_string()));
    router.register(nodes.screen, ButtonAction::FlyTo(DEFAULT_VIEW.to_string()));
    router.register(nodes.about_me, ButtonAction::Reveal(Section::AboutMe));
    router.register(nodes.skills, ButtonAction::Reveal(Section::Skills));
    debug!("{} buttons live", router.len());
}

/// The page: scene, camera, router and motion controller driven together
pub struct Portfolio {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub router: HitRouter<ButtonAction>,
    pub motion: MotionController,
    pub nodes: PortfolioNodes,
    revealed: Option<Section>,
}

impl Portfolio {
    pub fn new(options: &PortfolioOptions, rig: RigConfig) -> anyhow::Result<Self> {
        let (scene, nodes) = build_scene(options)?;

        let mut presets = portfolio_presets();
        presets.extend(rig.presets);
        let motion = MotionController::with_presets(rig.motion, presets)?;

        let mut camera = Camera::new(START_POSITION, options.fov_degrees(), 16.0 / 9.0);
        camera.look_at(Vec3::new(0.0, 7.0, -2.0));

        let mut router = HitRouter::new();
        register_buttons(&mut router, &nodes);

        info!(
            "portfolio scene ready: {} nodes, {} buttons, {} presets",
            scene.len(),
            router.len(),
            motion.presets().len()
        );

        Ok(Self {
            scene,
            camera,
            router,
            motion,
            nodes,
            revealed: None,
        })
    }

    /// Route a click and act on the button it hit, if any.
    pub fn click(&mut self, click: PointerClick) -> Option<ButtonAction> {
        let picked = self.router.dispatch(click, &self.camera, &mut self.scene)?;
        let name = self.scene.node(picked.root).map(|n| n.name().to_string()).unwrap_or_default();
        info!("{name} clicked");

        self.apply(&picked.handler);
        Some(picked.handler)
    }

    pub fn apply(&mut self, action: &ButtonAction) {
        match action {
            ButtonAction::FlyTo(preset) => {
                // Unknown presets are reported by the controller and ignored
                let _ = self.motion.move_to_preset(preset);
            }
            ButtonAction::FlyToPoint { position, look_at } => self.motion.move_to(*position, *look_at),
            ButtonAction::Reveal(section) => {
                info!("showing {section:?}");
                self.revealed = Some(*section);
            }
        }
    }

    /// Advance camera motion by one frame. Returns whether it is still moving.
    pub fn frame(&mut self, delta_seconds: f32) -> bool {
        self.motion.advance(&mut self.camera, delta_seconds)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    pub fn revealed_section(&self) -> Option<Section> {
        self.revealed
    }

    pub fn to_default_view(&mut self) -> Result<ViewPreset, MotionError> {
        self.motion.move_to_preset(DEFAULT_VIEW)
    }

    pub fn to_building_view(&mut self) -> Result<ViewPreset, MotionError> {
        self.motion.move_to_preset(BUILDING_VIEW)
    }

    pub fn to_photo_closeup(&mut self) -> Result<ViewPreset, MotionError> {
        self.motion.move_to_preset(PHOTO_CLOSEUP_VIEW)
    }

    pub fn to_screen_view(&mut self) -> Result<ViewPreset, MotionError> {
        self.motion.move_to_preset(SCREEN_VIEW)
    }
}
