//! The export table: one declaration per proxied method, grouped by subject.
//!
//! Declarations are data — each line names the subject, the method, the exact
//! parameter types in order and the exact return type. Methods noted `todo:`
//! are not exposed yet; subjects noted `@skip` are deliberately excluded and
//! produce no symbols. Callers must not assume coverage beyond what is
//! declared here.

use flatcall::export_proxies;

use crate::sdk::{
    Actor, ActorRegistry, AnimationData, Checkpoint, Pair, StringView, TextDraw, TextDrawRegistry,
    Vector2, Vector3, Vehicle,
};

export_proxies! {
    // Type aliases keep every declaration at one token per parameter.
    type ColourPair = Pair<i32, i32>;

    impl Actor {
        fn set_skin(&mut self, i32);
        fn get_skin(&self) -> i32;
        fn set_health(&mut self, f32);
        fn get_health(&self) -> f32;
        fn apply_animation(&mut self, &AnimationData);
        fn get_animation(&self) -> &AnimationData;
        fn clear_animations(&mut self);
        fn set_invulnerable(&mut self, bool);
        fn is_invulnerable(&self) -> bool;
        fn set_position(&mut self, Vector3);
        fn get_position(&self) -> Vector3;
    }

    impl ActorRegistry {
        fn create(&mut self, i32, Vector3, f32) -> *mut Actor;
        fn count(&self) -> usize;
    }
    // todo: ActorRegistry::get_event_dispatcher

    impl Checkpoint {
        fn set_position(&mut self, &Vector3);
        fn get_position(&self) -> Vector3;
        fn set_radius(&mut self, f32);
        fn get_radius(&self) -> f32;
        fn set_player_inside(&mut self, bool);
        fn is_player_inside(&self) -> bool;
        fn enable(&mut self);
        fn disable(&mut self);
        fn is_enabled(&self) -> bool;
    }

    impl Vehicle {
        fn get_model(&self) -> i32;
        fn set_colour(&mut self, i32, i32);
        fn get_colour(&self) -> ColourPair;
        fn set_health(&mut self, f32);
        fn get_health(&self) -> f32;
        fn set_position(&mut self, Vector3);
        fn get_position(&self) -> Vector3;
        fn set_siren(&mut self, bool);
        fn has_siren(&self) -> bool;
    }

    impl TextDraw {
        fn get_position(&self) -> Vector2;
        fn set_position(&mut self, Vector2);
        fn get_text(&self) -> StringView;
        fn get_model(&self) -> i32;
    }

    impl TextDrawRegistry {
        fn create(&mut self, Vector2, StringView) -> *mut TextDraw;
        #[overload(_model)]
        fn create(&mut self, Vector2, i32) -> *mut TextDraw;
        fn count(&self) -> usize;
    }
    // todo: TextDrawRegistry::get_event_dispatcher

    // Timers: @skip — the callback-taking surface cannot be forwarded as flat
    // symbols.
}
