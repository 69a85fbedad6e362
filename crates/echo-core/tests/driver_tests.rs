// Host-side tests for the redraw loop: a fake requestAnimationFrame host
// fires pending callbacks and the driver keeps one frame in flight at most.

use echo_core::*;

#[derive(Default)]
struct FakeHost {
    next_id: i32,
    live: Vec<i32>,
    requested: Vec<i32>,
    cancelled: Vec<i32>,
}

impl FrameScheduler for FakeHost {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.requested.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: i32) {
        self.live.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

struct Sim {
    host: FakeHost,
    driver: AnimationDriver<i32>,
    session: Session,
    painter: DrawList,
    clock: f64,
}

impl Sim {
    fn new() -> Self {
        let mut sim = Self {
            host: FakeHost::default(),
            driver: AnimationDriver::new(),
            session: Session::new(ImagingParameters::default(), Viewport::new(320.0, 240.0, 1.0)),
            painter: DrawList::new(),
            clock: 0.0,
        };
        sim.driver.restart(&mut sim.host, false);
        sim
    }

    /// Host refresh tick: fire every live callback once.
    fn tick(&mut self) -> usize {
        let due: Vec<i32> = std::mem::take(&mut self.host.live);
        self.clock += 1.0 / 60.0;
        for _ in &due {
            let frozen = self.session.params().frozen;
            let t = self.clock;
            let session = &mut self.session;
            let painter = &mut self.painter;
            self.driver.run_frame(&mut self.host, frozen, || {
                painter.clear();
                session.render_frame(painter, t, &mut FrameClock);
            });
        }
        due.len()
    }

    fn change(&mut self, edit: impl FnOnce(&mut ImagingParameters)) {
        if self.session.update_params(edit) {
            let frozen = self.session.params().frozen;
            self.driver.restart(&mut self.host, frozen);
        }
    }
}

#[test]
fn running_loop_renders_one_frame_per_tick() {
    let mut sim = Sim::new();
    for _ in 0..10 {
        assert_eq!(sim.tick(), 1);
    }
    assert_eq!(sim.driver.frames(), 10);
    assert_eq!(sim.host.live.len(), 1);
}

#[test]
fn parameter_change_cancels_one_and_schedules_one() {
    let mut sim = Sim::new();
    sim.tick();
    let pending = sim.driver.pending().unwrap();
    let requested_before = sim.host.requested.len();

    sim.change(|p| p.gain = Gain::clamped(80));

    assert_eq!(sim.host.cancelled, vec![pending]);
    assert_eq!(sim.host.requested.len(), requested_before + 1);
    assert_eq!(sim.host.live.len(), 1, "no duplicate loops");
    assert_eq!(sim.tick(), 1);
}

#[test]
fn unchanged_parameters_do_not_restart() {
    let mut sim = Sim::new();
    sim.change(|p| p.gain = Gain::clamped(55));
    assert!(sim.host.cancelled.is_empty());
    assert_eq!(sim.host.requested.len(), 1);
}

#[test]
fn rapid_changes_keep_a_single_pending_frame() {
    let mut sim = Sim::new();
    for hr in 100..110 {
        sim.change(|p| p.heart_rate = HeartRate::clamped(hr));
    }
    assert_eq!(sim.host.live.len(), 1);
    assert_eq!(sim.host.cancelled.len(), 10);
}

#[test]
fn freeze_stops_scheduling_and_mutation() {
    let mut sim = Sim::new();
    sim.change(|p| p.mode = Mode::MMode);
    for _ in 0..5 {
        sim.tick();
    }
    sim.change(|p| p.frozen = true);
    assert_eq!(sim.driver.pending(), None);
    assert!(sim.host.live.is_empty());

    let trace_len = sim.session.trace().len();
    let last = sim.session.last_frame();
    let frames = sim.driver.frames();
    let ops = sim.painter.ops().to_vec();

    for _ in 0..20 {
        assert_eq!(sim.tick(), 0);
    }
    assert_eq!(sim.session.trace().len(), trace_len);
    assert_eq!(sim.session.last_frame(), last);
    assert_eq!(sim.driver.frames(), frames);
    assert_eq!(sim.painter.ops(), &ops[..], "last frame stays on screen");
}

#[test]
fn changes_while_frozen_apply_on_unfreeze() {
    let mut sim = Sim::new();
    sim.tick();
    sim.change(|p| p.frozen = true);
    sim.change(|p| p.mode = Mode::Doppler);
    sim.change(|p| p.preset = Preset::ParasternalShortAxis);
    assert!(sim.host.live.is_empty(), "frozen edits never schedule");

    sim.change(|p| p.frozen = false);
    assert_eq!(sim.tick(), 1);
    let blends = sim
        .painter
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Blend(Blend::Lighter)))
        .count();
    assert_eq!(blends, 1, "doppler overlay drawn after unfreeze");
}
