use keyspline::{
    AnimationEvent, AnimationListener, KeyframeAnimation, LoopCount, Player, Vec2,
};

struct Announce;

impl AnimationListener for Announce {
    fn started(&mut self, event: &AnimationEvent<'_>) {
        println!("started ({:.2}s per pass)", event.animation.duration());
    }

    fn looped(&mut self, event: &AnimationEvent<'_>) {
        println!("looped at {:.2}s", event.elapsed);
    }

    fn ended(&mut self, event: &AnimationEvent<'_>) {
        println!("ended at {:.2}s", event.elapsed);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // A wobbling square orbit that grows on the far side.
    let anim = KeyframeAnimation::builder()
        .add_untimed_keyframe()
        .set_position(Vec2::new(100.0, 0.0))
        .rotate_by(90.0)
        .add_untimed_keyframe()
        .move_by(Vec2::new(0.0, 100.0))
        .rotate_by(90.0)
        .scale_by(Vec2::new(2.0, 2.0))
        .add_untimed_keyframe()
        .move_by(Vec2::new(-100.0, 0.0))
        .rotate_by(90.0)
        .scale_by(Vec2::new(0.5, 0.5))
        .add_untimed_keyframe()
        .set_total_duration(2.0)
        .set_circular(true)
        .build()?;

    let mut player = Player::new();
    player.add_listener(Announce);
    player.play_looped(anim, LoopCount::Times(2));

    let dt = 1.0 / 8.0;
    while player.is_playing() {
        let Some(o) = player.tick(dt)? else {
            continue;
        };
        println!(
            "t={:5.3} pos=({:7.2}, {:7.2}) rot={:6.1} scale=({:.2}, {:.2})",
            player.elapsed().unwrap_or_default(),
            o.position.x,
            o.position.y,
            o.rotation,
            o.scale.x,
            o.scale.y,
        );
    }

    Ok(())
}
