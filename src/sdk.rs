//! Miniature slice of the host SDK: the interface objects whose methods the
//! proxy table exports.
//!
//! In the real system these live in the host process and are only consumed
//! through their declared signatures; this module stands in for the host so
//! the demo is self-contained.

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct AnimationData {
    pub id: i32,
    pub delta: f32,
    pub loops: bool,
}

/// Borrowed string handle that can cross the C ABI.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct StringView {
    pub ptr: *const u8,
    pub len: usize,
}

impl StringView {
    pub const fn empty() -> Self {
        StringView {
            ptr: std::ptr::null(),
            len: 0,
        }
    }

    pub fn from_static(text: &'static str) -> Self {
        StringView {
            ptr: text.as_ptr(),
            len: text.len(),
        }
    }

    /// # Safety
    /// `self` must still point at the UTF-8 bytes it was created from.
    pub unsafe fn as_str(&self) -> &str {
        if self.ptr.is_null() {
            return "";
        }
        unsafe { std::str::from_utf8_unchecked(std::slice::from_raw_parts(self.ptr, self.len)) }
    }
}

#[derive(Default)]
pub struct Actor {
    skin: i32,
    health: f32,
    position: Vector3,
    animation: AnimationData,
    invulnerable: bool,
}

impl Actor {
    pub fn set_skin(&mut self, skin: i32) {
        self.skin = skin;
    }

    pub fn get_skin(&self) -> i32 {
        self.skin
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    pub fn get_health(&self) -> f32 {
        self.health
    }

    pub fn apply_animation(&mut self, animation: &AnimationData) {
        self.animation = *animation;
    }

    pub fn get_animation(&self) -> &AnimationData {
        &self.animation
    }

    pub fn clear_animations(&mut self) {
        self.animation = AnimationData::default();
    }

    pub fn set_invulnerable(&mut self, invulnerable: bool) {
        self.invulnerable = invulnerable;
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn get_position(&self) -> Vector3 {
        self.position
    }
}

/// Owns every actor; hands out stable raw pointers the way the host does.
#[derive(Default)]
pub struct ActorRegistry {
    actors: Vec<Box<Actor>>,
}

impl ActorRegistry {
    // the demo host keeps no rotation state; the angle is part of the ABI
    pub fn create(&mut self, skin: i32, position: Vector3, _angle: f32) -> *mut Actor {
        let mut actor = Box::new(Actor {
            skin,
            position,
            health: 100.0,
            ..Actor::default()
        });
        let ptr: *mut Actor = &mut *actor;
        self.actors.push(actor);
        ptr
    }

    pub fn count(&self) -> usize {
        self.actors.len()
    }
}

#[derive(Default)]
pub struct Checkpoint {
    position: Vector3,
    radius: f32,
    inside: bool,
    enabled: bool,
}

impl Checkpoint {
    pub fn set_position(&mut self, position: &Vector3) {
        self.position = *position;
    }

    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    pub fn set_player_inside(&mut self, inside: bool) {
        self.inside = inside;
    }

    pub fn is_player_inside(&self) -> bool {
        self.inside
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

pub struct Vehicle {
    model: i32,
    health: f32,
    position: Vector3,
    colours: Pair<i32, i32>,
    siren: bool,
}

impl Vehicle {
    pub fn new(model: i32, position: Vector3) -> Self {
        Vehicle {
            model,
            health: 1000.0,
            position,
            colours: Pair {
                first: 0,
                second: 0,
            },
            siren: false,
        }
    }

    pub fn get_model(&self) -> i32 {
        self.model
    }

    pub fn set_colour(&mut self, primary: i32, secondary: i32) {
        self.colours = Pair {
            first: primary,
            second: secondary,
        };
    }

    pub fn get_colour(&self) -> Pair<i32, i32> {
        self.colours
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    pub fn get_health(&self) -> f32 {
        self.health
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    pub fn set_siren(&mut self, siren: bool) {
        self.siren = siren;
    }

    pub fn has_siren(&self) -> bool {
        self.siren
    }
}

pub struct TextDraw {
    position: Vector2,
    text: StringView,
    model: i32,
}

impl TextDraw {
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn get_text(&self) -> StringView {
        self.text
    }

    pub fn get_model(&self) -> i32 {
        self.model
    }
}

#[derive(Default)]
pub struct TextDrawRegistry {
    draws: Vec<Box<TextDraw>>,
}

impl TextDrawRegistry {
    pub fn create(&mut self, position: Vector2, text: StringView) -> *mut TextDraw {
        self.push(TextDraw {
            position,
            text,
            model: 0,
        })
    }

    pub fn create_model(&mut self, position: Vector2, model: i32) -> *mut TextDraw {
        self.push(TextDraw {
            position,
            text: StringView::empty(),
            model,
        })
    }

    pub fn count(&self) -> usize {
        self.draws.len()
    }

    fn push(&mut self, draw: TextDraw) -> *mut TextDraw {
        let mut draw = Box::new(draw);
        let ptr: *mut TextDraw = &mut *draw;
        self.draws.push(draw);
        ptr
    }
}
