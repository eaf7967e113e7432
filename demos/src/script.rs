// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny input script runner: synthesizes pointer events frame by frame.

use kurbo::{Point, Vec2};
use patchwork::{PointerEvent, Session, SessionConfig};
use patchwork_gesture::GestureMode;
use patchwork_surface::RecordingRenderer;

/// Upper bound on frames spent waiting for animations.
const MAX_SETTLE_FRAMES: u32 = 2_000;

pub(crate) struct Script {
    pub(crate) session: Session,
    pub(crate) renderer: RecordingRenderer,
    now: u64,
    frame_ms: u64,
}

impl Script {
    pub(crate) fn new(config: SessionConfig, frame_ms: u64) -> anyhow::Result<Self> {
        let session = Session::new(config)?;
        let mut script = Self {
            session,
            renderer: RecordingRenderer::default(),
            now: 0,
            frame_ms,
        };
        script.frame();
        Ok(script)
    }

    /// Advances one frame and renders it.
    pub(crate) fn frame(&mut self) {
        self.session.tick(self.now);
        self.session.render(&mut self.renderer);
        self.now += self.frame_ms;
    }

    /// Presses at `from`, moves to `to` over `steps` frames, and releases.
    pub(crate) fn drag(&mut self, from: Point, to: Point, steps: u32) {
        self.press(from);
        self.move_to(from, to, steps);
        self.release();
    }

    pub(crate) fn press(&mut self, at: Point) {
        self.session.pointer(PointerEvent::Start { position: at });
        self.frame();
    }

    pub(crate) fn move_to(&mut self, from: Point, to: Point, steps: u32) {
        let steps = steps.max(1);
        let mut last = from;
        for i in 1..=steps {
            let position = from.lerp(to, f64::from(i) / f64::from(steps));
            self.session.pointer(PointerEvent::Update {
                delta: position - last,
                position,
            });
            last = position;
            self.frame();
        }
    }

    pub(crate) fn release(&mut self) {
        self.session.pointer(PointerEvent::End);
        self.frame();
    }

    /// Sends `events` wheel events of `delta` each, then ends the scroll.
    pub(crate) fn scroll(&mut self, delta: f64, events: u32) {
        for _ in 0..events {
            self.session.pointer(PointerEvent::Scroll { delta });
            self.frame();
        }
        self.session.pointer(PointerEvent::ScrollEnd);
        self.frame();
    }

    /// Runs frames until nothing animates, returning how many it took.
    pub(crate) fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while self.session.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.frame();
            frames += 1;
        }
        frames
    }

    /// Runs frames until nothing animates, sampling the zoom displacement
    /// every `every` frames.
    pub(crate) fn settle_sampled(&mut self, every: u32) -> Vec<f64> {
        let every = every.max(1);
        let mut samples = vec![self.session.view().zoom_displacement];
        let mut frames = 0;
        while self.session.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.frame();
            frames += 1;
            if frames % every == 0 {
                samples.push(self.session.view().zoom_displacement);
            }
        }
        samples.push(self.session.view().zoom_displacement);
        samples
    }

    pub(crate) fn set_mode(&mut self, mode: GestureMode) {
        self.session.set_mode(mode);
        self.frame();
    }

    pub(crate) fn pan_by(&mut self, delta: Vec2) {
        let from = Point::new(20.0, 20.0);
        self.drag(from, from + delta, 8);
    }
}
