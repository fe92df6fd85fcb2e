use super::*;

const MS_300: Duration = Duration::from_millis(300);

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
        assert_eq!(easing.apply(3.0), 1.0, "{easing:?}");
    }
    assert!(Easing::CubicOut.apply(0.5) > 0.5);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
}

#[test]
fn tween_interpolates_and_finishes() {
    let t0 = Instant::now();
    let tween = Tween::new(0.0f32, 10.0, t0, Duration::from_millis(100), Easing::Linear);
    assert_eq!(tween.value_at(t0), 0.0);
    assert!((tween.value_at(t0 + Duration::from_millis(50)) - 5.0).abs() < 1e-3);
    assert_eq!(tween.value_at(t0 + Duration::from_millis(500)), 10.0);
    assert!(!tween.is_finished(t0 + Duration::from_millis(99)));
    assert!(tween.is_finished(t0 + Duration::from_millis(100)));
}

#[test]
fn settled_tween_is_never_animating() {
    let t0 = Instant::now();
    let tween = Tween::settled(3.0f32, t0);
    assert!(tween.is_finished(t0));
    assert_eq!(tween.value_at(t0), 3.0);
}

#[test]
fn first_request_snaps_to_target() {
    let t0 = Instant::now();
    let mut anim = Animator::new();
    anim.begin_frame();
    let v = anim.animate_value(Id::raw(1), 4.0, MS_300, Easing::Linear, t0);
    anim.end_frame();
    assert_eq!(v, 4.0);
    assert!(!anim.is_animating(t0));
}

#[test]
fn changing_target_starts_from_displayed_value() {
    let t0 = Instant::now();
    let id = Id::raw(7);
    let mut anim = Animator::new();

    anim.begin_frame();
    anim.animate_value(id, 0.0, MS_300, Easing::Linear, t0);
    anim.end_frame();

    anim.begin_frame();
    let v = anim.animate_value(id, 30.0, MS_300, Easing::Linear, t0);
    anim.end_frame();
    assert_eq!(v, 0.0);
    assert!(anim.is_animating(t0));

    let mid = t0 + Duration::from_millis(150);
    anim.begin_frame();
    let v = anim.animate_value(id, 30.0, MS_300, Easing::Linear, mid);
    anim.end_frame();
    assert!((v - 15.0).abs() < 0.5, "{v}");

    let done = t0 + MS_300;
    anim.begin_frame();
    let v = anim.animate_value(id, 30.0, MS_300, Easing::Linear, done);
    anim.end_frame();
    assert_eq!(v, 30.0);
    assert!(!anim.is_animating(done));
}

#[test]
fn color_animation_blends_channels() {
    let t0 = Instant::now();
    let id = Id::raw(9);
    let mut anim = Animator::new();

    anim.begin_frame();
    anim.animate_color(id, Color::Rgb(0, 0, 0), MS_300, Easing::Linear, t0);
    anim.end_frame();

    anim.begin_frame();
    anim.animate_color(id, Color::Rgb(200, 100, 0), MS_300, Easing::Linear, t0);
    anim.end_frame();

    anim.begin_frame();
    let c = anim.animate_color(
        id,
        Color::Rgb(200, 100, 0),
        MS_300,
        Easing::Linear,
        t0 + Duration::from_millis(150),
    );
    anim.end_frame();
    assert_eq!(c, Color::Rgb(100, 50, 0));

    assert_eq!(
        anim.animate_color(id, Color::Indexed(2), MS_300, Easing::Linear, t0),
        Color::Indexed(2)
    );
}

#[test]
fn untouched_entries_are_collected_at_end_of_frame() {
    let t0 = Instant::now();
    let mut anim = Animator::new();

    anim.begin_frame();
    anim.animate_value(Id::raw(1), 1.0, MS_300, Easing::Linear, t0);
    anim.animate_color(Id::raw(2), Color::WHITE, MS_300, Easing::Linear, t0);
    anim.end_frame();
    assert_eq!(anim.len(), 2);

    anim.begin_frame();
    anim.animate_value(Id::raw(1), 1.0, MS_300, Easing::Linear, t0);
    anim.end_frame();
    assert_eq!(anim.len(), 1);

    anim.begin_frame();
    anim.end_frame();
    assert!(anim.is_empty());
}
