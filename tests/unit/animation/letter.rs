use std::sync::Mutex;

use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = LogBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

fn glyph() -> Arc<Raster> {
    Arc::new(Raster::from_fn(14, 18, |x, y| {
        let v = if (x / 3 + y / 4) % 2 == 0 { 0.0 } else { 1.0 };
        image::Rgb([v, v, v])
    }))
}

#[test]
fn new_letter_starts_with_one_small_state() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let l = Letter::new(glyph(), 1, Background::White, &mut rng);
        assert_eq!(l.states().len(), 1);
        let s = l.states()[0];
        assert!((-1..=1).contains(&s.x_shift));
        assert!((-1..=1).contains(&s.y_shift));
        assert!((-2.0..2.0).contains(&s.angle));
        assert_eq!(l.fill(), 1.0);
    }
}

#[test]
fn walk_stays_within_borders() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut l = Letter::new(glyph(), 3, Background::Black, &mut rng);
    l.extend_queue(500, false, &mut rng);
    l.extend_queue(500, true, &mut rng);
    let borders = *l.borders();
    assert!(l.states().iter().all(|s| borders.contains(s)));
    assert!(l.states().iter().all(|s| (-5..=5).contains(&s.x_shift)));
    assert!(l.states().iter().all(|s| (-20.0..=20.0).contains(&s.angle)));
}

#[test]
fn walk_steps_are_cumulative_increments() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut l = Letter::new(glyph(), 1, Background::White, &mut rng);
    l.extend_queue(200, false, &mut rng);
    for pair in l.states().windows(2) {
        assert!((pair[1].x_shift - pair[0].x_shift).abs() <= 1);
        assert!((pair[1].y_shift - pair[0].y_shift).abs() <= 1);
        assert!((pair[1].angle - pair[0].angle).abs() <= 2.0);
    }
}

#[test]
fn plus_reverse_builds_a_palindrome() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut l = Letter::new(glyph(), 1, Background::White, &mut rng);
    let steps = 30;
    l.extend_queue(steps, true, &mut rng);

    let q = l.states();
    let n = 2 * (steps + 1);
    assert_eq!(q.len(), n);
    for i in 0..n {
        assert_eq!(q[i], q[n - 1 - i]);
    }
}

#[test]
fn same_seed_gives_same_walk() {
    let mut a_rng = StdRng::seed_from_u64(99);
    let mut b_rng = StdRng::seed_from_u64(99);
    let mut a = Letter::new(glyph(), 2, Background::White, &mut a_rng);
    let mut b = Letter::new(glyph(), 2, Background::White, &mut b_rng);
    a.extend_queue(40, true, &mut a_rng);
    b.extend_queue(40, true, &mut b_rng);
    assert_eq!(a.states(), b.states());
}

#[test]
fn render_state_keeps_glyph_shape_and_leaves_glyph_untouched() {
    let mut rng = StdRng::seed_from_u64(5);
    let g = glyph();
    let before = (*g).clone();
    let mut l = Letter::new(g.clone(), 1, Background::White, &mut rng);
    l.extend_queue(10, true, &mut rng);
    for i in 0..l.states().len() {
        let out = l.render_state(i);
        assert_eq!(out.dimensions(), g.dimensions());
        assert!(out.pixels().all(|p| p.0.iter().all(|c| (0.0..=1.0).contains(c))));
    }
    assert_eq!(*l.glyph().as_ref(), before);
}

#[test]
fn apply_zero_state_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    let l = Letter::new(glyph(), 1, Background::White, &mut rng);
    let still = AnimationState {
        x_shift: 0,
        y_shift: 0,
        angle: 0.0,
    };
    assert_eq!(l.apply(still), *l.glyph().as_ref());
}

#[test]
fn out_of_range_state_falls_back_to_first_and_warns() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut l = Letter::new(glyph(), 1, Background::White, &mut rng);
    l.extend_queue(4, true, &mut rng);
    let len = l.states().len();

    let (first, quiet) = capture_logs(|| l.render_state(0));
    assert!(quiet.is_empty());

    let (fallback, logs) = capture_logs(|| l.render_state(len));
    assert_eq!(fallback, first);
    assert!(logs.contains("out of range"), "logs: {logs}");

    let (far, _) = capture_logs(|| l.render_state(len + 100));
    assert_eq!(far, first);
}
