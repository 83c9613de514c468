//! Drive every sample through the headless runtime.

mod common;

use arcade_samples::{
    audio::PlaybackState,
    color,
    graphics::Flip,
    math::Rect,
    samples::{
        space_shooter::signals::WeaponType, AtlasTextures, HelloWorld, KeyboardInput,
        RenderingText, RenderingTextures, RotatingTextures, Sounds, SpaceShooter,
    },
    AssetSource, Game, KeyCode, Runtime, Script, Vec2,
};
use common::{start, steps, tap};

/// Compare floats that went through a couple of additions.
fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn hello_world_changes_color_every_second() {
    let mut runtime = start(HelloWorld::with_seed(42), HelloWorld::config());

    steps(&mut runtime, 59);
    assert_eq!(runtime.game().text_color(), color::WHITE);

    let frame = runtime.step();
    let text = frame.texts().next().unwrap();
    assert_eq!(text.text, "Hello World!!");
    // 13 glyphs of 8x12 centered in a 1500x800 window
    assert_eq!(text.size, Vec2::new(104.0, 12.0));
    assert_eq!(text.position, Vec2::new(698.0, 394.0));

    runtime.step();
    assert_ne!(runtime.game().text_color(), color::WHITE);
}

#[test]
fn atlas_loops_full_size_flame() {
    let mut runtime = start(AtlasTextures::with_seed(7), AtlasTextures::config());

    let frame = runtime.step();
    let flame = frame.textures().next().unwrap();
    assert_eq!(flame.texture, "atlas");
    assert_eq!(flame.region, Some(Rect::new(0.0, 0.0, 64.0, 64.0)));
    assert_eq!(flame.position, Vec2::new(250.0, 250.0));
    assert!(close(flame.scale, 0.25));
    assert_eq!(flame.layer, 1);

    // Every frame takes eight ticks, the flame grows for eight frames
    steps(&mut runtime, 7);
    assert_eq!(runtime.game().current_frame(), 1);
    assert!(!runtime.game().is_full_size());

    steps(&mut runtime, 300);
    assert!(runtime.game().is_full_size());
    for _ in 0..100 {
        runtime.step();
        assert!(runtime.game().current_frame() >= 8);
    }
}

#[test]
fn atlas_flips_randomly() {
    let mut runtime = start(AtlasTextures::with_seed(1), AtlasTextures::config());

    let flips = (0..400)
        .map(|_| runtime.step().textures().next().unwrap().flip)
        .collect::<Vec<_>>();

    assert!(flips.contains(&Flip::None));
    assert!(flips.contains(&Flip::Horizontal));
}

#[test]
fn keyboard_input_moves_ship() {
    let mut runtime = start(KeyboardInput::default(), KeyboardInput::config());
    assert_eq!(runtime.game().ship_position(), Vec2::new(400.0, 600.0));

    runtime.key_down(KeyCode::ArrowRight);
    runtime.step();
    let moved = runtime.game().ship_position();
    assert!(close(moved.x, 400.0 + 50.0 / 60.0));
    assert!(close(moved.y, 600.0));

    // Stops immediately when released
    runtime.key_up(KeyCode::ArrowRight);
    runtime.step();
    assert_eq!(runtime.game().ship_position(), moved);
}

#[test]
fn keyboard_input_reuses_lasers() {
    let mut runtime = start(KeyboardInput::default(), KeyboardInput::config());

    tap(&mut runtime, KeyCode::Space);
    let laser = runtime.game().lasers().active().next().unwrap();
    // Above the ship, already moved for a single tick
    assert!(close(laser.position().x, 400.0));
    assert!(close(laser.position().y, 579.0 - 400.0 / 60.0));

    tap(&mut runtime, KeyCode::Space);
    assert_eq!(runtime.game().lasers().len(), 2);
    assert_eq!(runtime.game().lasers().active().count(), 2);

    let frame = runtime.step();
    assert_eq!(
        frame
            .textures()
            .filter(|texture| texture.texture == "orange-lazer")
            .count(),
        2
    );

    // Fly out of the window
    steps(&mut runtime, 120);
    assert_eq!(runtime.game().lasers().active().count(), 0);

    tap(&mut runtime, KeyCode::Space);
    assert_eq!(runtime.game().lasers().len(), 2);
    assert_eq!(runtime.game().lasers().active().count(), 1);
}

#[test]
fn rendering_text_bounces_off_the_right_edge() {
    let mut runtime = start(RenderingText::with_seed(3), RenderingText::config());

    runtime.step();
    assert!(close(runtime.game().position().x, 400.0 + 200.0 / 60.0));
    assert_eq!(runtime.game().text_color(), color::WHITE);

    // The right edge is hit before the bottom edge
    steps(&mut runtime, 110);
    assert_eq!(runtime.game().velocity(), Vec2::new(-200.0, 200.0));
    assert_ne!(runtime.game().text_color(), color::WHITE);

    // Half of the 96 pixels wide text never passes the edge
    assert!(runtime.game().position().x <= 800.0 - 48.0);
}

#[test]
fn rendering_text_wider_than_the_window_hits_both_sides() {
    // 12 glyphs of 80 pixels don't fit in the 800 pixels wide window
    let asset_source = AssetSource::new()
        .with_embedded_asset("font", "png", common::png(94 * 80, 12))
        .with_embedded_asset(
            "font",
            "toml",
            b"glyph_size = { width = 80, height = 12 }".as_slice(),
        );
    let mut runtime = Runtime::new(
        RenderingText::with_seed(3),
        asset_source,
        RenderingText::config(),
    )
    .unwrap();

    runtime.step();

    // Both bounces cancel each other out
    assert_eq!(runtime.game().velocity(), Vec2::new(200.0, 200.0));
    assert_ne!(runtime.game().text_color(), color::WHITE);
}

#[test]
fn rendering_textures_draws_mascot_centered() {
    let mut runtime = start(RenderingTextures::default(), RenderingTextures::config());

    let frame = runtime.step();
    let mascot = frame.textures().next().unwrap();

    assert_eq!(mascot.texture, "mascot");
    assert_eq!(mascot.position, Vec2::new(750.0, 400.0));
}

#[test]
fn rotating_textures_turns_fifty_degrees_per_second() {
    let mut runtime = start(RotatingTextures::default(), RotatingTextures::config());

    steps(&mut runtime, 59);
    let frame = runtime.step();
    assert!(close(runtime.game().angle(), 50.0));

    let textures = frame.textures().collect::<Vec<_>>();
    assert_eq!(textures[0].texture, "gear");
    assert!(close(textures[0].rotation, 50.0));

    // Label on top
    assert_eq!(textures[1].texture, "text");
    assert_eq!(textures[1].layer, 2);
    assert!(close(textures[1].rotation, 0.0));
}

#[test]
fn sounds_transport_controls() {
    const INSTRUCTIONS: &str =
        "Instructions: Space(play/pause) Esc(restart) Left(-5s) - Right(+5s)";

    let mut runtime = start(Sounds::default(), Sounds::config());
    assert_eq!(
        runtime.context().title(),
        format!("Stopped - 00:00 | {INSTRUCTIONS}")
    );

    tap(&mut runtime, KeyCode::Space);
    steps(&mut runtime, 120);
    assert_eq!(
        runtime.step().title,
        format!("Playing - 00:02 | {INSTRUCTIONS}")
    );

    tap(&mut runtime, KeyCode::ArrowRight);
    assert!(runtime.step().title.starts_with("Playing - 00:07"));

    tap(&mut runtime, KeyCode::Space);
    assert!(runtime.step().title.starts_with("Paused - 00:07"));

    // Rewinding stops at the start
    tap(&mut runtime, KeyCode::ArrowLeft);
    tap(&mut runtime, KeyCode::ArrowLeft);
    assert!(runtime.step().title.starts_with("Paused - 00:00"));

    tap(&mut runtime, KeyCode::Escape);
    assert!(runtime.step().title.starts_with("Stopped - 00:00"));
}

#[test]
fn sounds_stop_at_the_end() {
    let mut runtime = start(Sounds::default(), Sounds::config());

    // Ten seconds long, the second skip reaches the end
    tap(&mut runtime, KeyCode::Space);
    tap(&mut runtime, KeyCode::ArrowRight);
    tap(&mut runtime, KeyCode::ArrowRight);

    let music = runtime.game().music().unwrap();
    assert_eq!(music.state(), PlaybackState::Stopped);
    assert_eq!(music.position().as_secs(), 0);
}

#[test]
fn space_shooter_swaps_weapons() {
    let mut runtime = start(SpaceShooter::default(), SpaceShooter::config());

    let selection = runtime.game().selection().unwrap();
    assert_eq!(selection.weapon_type(), WeaponType::White);
    assert_eq!(
        selection.icon_position(WeaponType::White),
        Vec2::new(368.0, 768.0)
    );
    assert_eq!(
        selection.icon_position(WeaponType::Blue),
        Vec2::new(432.0, 768.0)
    );

    tap(&mut runtime, KeyCode::Tab);
    assert_eq!(
        runtime.game().ship().unwrap().weapon().weapon_type(),
        WeaponType::Red
    );
    assert_eq!(
        runtime.game().selection().unwrap().weapon_type(),
        WeaponType::Red
    );

    // The reticle is drawn last, over the selected icon
    let frame = runtime.step();
    let reticle = frame.textures().last().unwrap();
    assert_eq!(reticle.texture, "weapon-selection");
    assert_eq!(reticle.position, Vec2::new(384.0, 768.0));

    for _ in 0..3 {
        tap(&mut runtime, KeyCode::Tab);
    }
    assert_eq!(
        runtime.game().selection().unwrap().weapon_type(),
        WeaponType::White
    );
}

#[test]
fn space_shooter_bullets_use_weapon_color() {
    let mut runtime = start(SpaceShooter::default(), SpaceShooter::config());

    tap(&mut runtime, KeyCode::Tab);
    tap(&mut runtime, KeyCode::Space);
    tap(&mut runtime, KeyCode::Tab);
    tap(&mut runtime, KeyCode::Space);

    let weapon = runtime.game().ship().unwrap().weapon();
    let tints = weapon
        .bullets()
        .active()
        .map(|bullet| bullet.tint())
        .collect::<Vec<_>>();
    assert_eq!(tints, [color::RED, color::GREEN]);

    // Bullets are drawn below the weapon selection
    let frame = runtime.step();
    let bullets = frame
        .textures()
        .filter(|texture| texture.texture == "laser" && texture.layer == 0)
        .count();
    assert_eq!(bullets, 2);
}

#[test]
fn space_shooter_follows_window_size() {
    let mut runtime = start(SpaceShooter::default(), SpaceShooter::config());

    runtime.resize(600.0, 600.0);

    let selection = runtime.game().selection().unwrap();
    assert_eq!(
        selection.icon_position(WeaponType::Red),
        Vec2::new(284.0, 568.0)
    );
}

#[test]
fn space_shooter_bullets_keep_the_world_they_were_fired_in() {
    let mut runtime = start(SpaceShooter::default(), SpaceShooter::config());

    tap(&mut runtime, KeyCode::Space);

    // The 8 pixels wide bullet right of the ship center doesn't fit anymore
    runtime.resize(404.0, 800.0);
    tap(&mut runtime, KeyCode::Space);

    let weapon = runtime.game().ship().unwrap().weapon();
    assert_eq!(weapon.bullets().len(), 2);
    assert_eq!(active_bullets(&runtime), 1);

    // The first bullet flies on in the world it was fired in
    steps(&mut runtime, 60);
    assert_eq!(active_bullets(&runtime), 1);

    // Until it leaves through the top
    steps(&mut runtime, 40);
    assert_eq!(active_bullets(&runtime), 0);
}

/// Amount of bullets flying.
fn active_bullets(runtime: &Runtime<SpaceShooter>) -> usize {
    runtime
        .game()
        .ship()
        .unwrap()
        .weapon()
        .bullets()
        .active()
        .count()
}

#[test]
fn missing_assets_fail_loading() {
    let Err(err) = Runtime::new(
        SpaceShooter::default(),
        AssetSource::new(),
        SpaceShooter::config(),
    ) else {
        panic!("loading without assets must fail");
    };

    assert!(err
        .chain()
        .any(|cause| cause.to_string().contains("weapon-selection")));
}

#[test]
fn replay_space_shooter_script() {
    let script = Script::from_toml(
        r#"
        duration = 1.0

        [[events]]
        at = 0.1
        key = "Space"
        state = "down"

        [[events]]
        at = 0.2
        key = "Space"
        state = "up"
        "#,
    )
    .unwrap();

    let frame = SpaceShooter::default()
        .replay(common::asset_source(), SpaceShooter::config(), &script)
        .unwrap();

    assert_eq!(frame.ticks, 60);
    assert_eq!(frame.title, "Space Shooter");
    // Ship, bullet, four icons and the reticle
    assert_eq!(frame.commands.len(), 7);
}
