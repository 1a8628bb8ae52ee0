//! Demo host: builds a few SDK subjects and drives them through the exported
//! proxy symbols exactly as a separately compiled caller would — by flat name,
//! subject first, positional arguments after.

mod proxies;
mod sdk;

use flatcall::proxy_symbol;
use proxies::*;
use sdk::{
    ActorRegistry, AnimationData, Checkpoint, StringView, TextDrawRegistry, Vector2, Vector3,
    Vehicle,
};

fn main() {
    // =========================================================================
    // Actors: create through the registry proxy, mutate through method proxies
    // =========================================================================
    let mut actors = ActorRegistry::default();
    let spawn = Vector3 {
        x: 10.0,
        y: 20.0,
        z: 3.0,
    };
    let actor = unsafe { &mut *ActorRegistry_create(&mut actors, 101, spawn, 90.0) };

    unsafe {
        Actor_set_health(actor, 80.0);
        Actor_set_invulnerable(actor, true);
        Actor_apply_animation(
            actor,
            &AnimationData {
                id: 3,
                delta: 4.1,
                loops: true,
            },
        );
    }
    println!(
        "actor: skin {} health {} invulnerable {} anim {}",
        unsafe { Actor_get_skin(actor) },
        unsafe { Actor_get_health(actor) },
        unsafe { Actor_is_invulnerable(actor) },
        unsafe { Actor_get_animation(actor).id },
    );
    println!("actors alive: {}", unsafe { ActorRegistry_count(&actors) });

    // =========================================================================
    // Checkpoints: binding a symbol by name, as the external side does
    // =========================================================================
    let mut checkpoint = Checkpoint::default();
    let set_radius: unsafe extern "C" fn(&mut Checkpoint, f32) =
        proxy_symbol!(Checkpoint::set_radius);
    unsafe {
        Checkpoint_set_position(&mut checkpoint, &spawn);
        set_radius(&mut checkpoint, 2.5);
        Checkpoint_enable(&mut checkpoint);
    }
    println!(
        "checkpoint: at {:?} radius {} enabled {}",
        unsafe { Checkpoint_get_position(&checkpoint) },
        unsafe { Checkpoint_get_radius(&checkpoint) },
        unsafe { Checkpoint_is_enabled(&checkpoint) },
    );

    // =========================================================================
    // Vehicles: value, pair and boolean state through proxies
    // =========================================================================
    let mut vehicle = Vehicle::new(
        411,
        Vector3 {
            x: -5.0,
            y: 0.0,
            z: 1.5,
        },
    );
    unsafe {
        Vehicle_set_colour(&mut vehicle, 3, 6);
        Vehicle_set_siren(&mut vehicle, true);
        Vehicle_set_health(&mut vehicle, 850.0);
        Vehicle_set_position(
            &mut vehicle,
            Vector3 {
                x: -4.0,
                y: 1.0,
                z: 1.5,
            },
        );
    }
    let colour = unsafe { Vehicle_get_colour(&vehicle) };
    println!(
        "vehicle: model {} colours {}/{} siren {} health {} at {:?}",
        unsafe { Vehicle_get_model(&vehicle) },
        colour.first,
        colour.second,
        unsafe { Vehicle_has_siren(&vehicle) },
        unsafe { Vehicle_get_health(&vehicle) },
        unsafe { Vehicle_get_position(&vehicle) },
    );

    // =========================================================================
    // Text draws: overloaded create exposed as two distinct symbols
    // =========================================================================
    let mut draws = TextDrawRegistry::default();
    let banner = unsafe {
        &mut *TextDrawRegistry_create(
            &mut draws,
            Vector2 { x: 320.0, y: 12.0 },
            StringView::from_static("welcome"),
        )
    };
    let preview = unsafe {
        &mut *TextDrawRegistry_create_model(&mut draws, Vector2 { x: 16.0, y: 440.0 }, 411)
    };
    unsafe {
        TextDraw_set_position(banner, Vector2 { x: 320.0, y: 16.0 });
    }
    let banner_text = unsafe { TextDraw_get_text(banner) };
    println!(
        "textdraws: {} (banner '{}' at {:?}, preview model {})",
        unsafe { TextDrawRegistry_count(&draws) },
        unsafe { banner_text.as_str() },
        unsafe { TextDraw_get_position(banner) },
        unsafe { TextDraw_get_model(preview) },
    );
}
