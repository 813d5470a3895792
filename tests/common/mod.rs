//! Shared test infrastructure for rgbw-ramp integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use rgbw_ramp::{PackedColor, PixelSink, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Pixel Sink
// ============================================================================

/// Everything the driver did to the sink, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Set(usize, PackedColor),
    Commit,
    Brightness(u8),
}

/// Mock strip that records every call and keeps the pending frame
pub struct MockSink {
    pixels: Vec<PackedColor>,
    events: Vec<SinkEvent>,
}

impl MockSink {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            pixels: vec![PackedColor::OFF; pixel_count],
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    pub fn commit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Commit))
            .count()
    }

    /// Indices written, in order
    pub fn written_indices(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Set(index, _) => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Frames as seen by the LEDs: the pending buffer at each commit
    pub fn committed_frames(&self) -> Vec<Vec<PackedColor>> {
        let mut frame = vec![PackedColor::OFF; self.pixels.len()];
        let mut frames = Vec::new();
        for event in &self.events {
            match event {
                SinkEvent::Set(index, color) => frame[*index] = *color,
                SinkEvent::Commit => frames.push(frame.clone()),
                SinkEvent::Brightness(_) => {}
            }
        }
        frames
    }
}

impl PixelSink for MockSink {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.events.push(SinkEvent::Brightness(brightness));
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = color;
        }
        self.events.push(SinkEvent::Set(index, color));
    }

    fn commit(&mut self) {
        self.events.push(SinkEvent::Commit);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay recording each requested pause in microseconds
pub struct MockDelay {
    delays_us: Vec<u64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            delays_us: Vec::new(),
        }
    }

    pub fn delays_us(&self) -> &[u64] {
        &self.delays_us
    }

    pub fn total_us(&self) -> u64 {
        self.delays_us.iter().sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_us.push(ns as u64 / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delays_us.push(us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_us.push(ms as u64 * 1000);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source that moves forward by a fixed tick on every read
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    tick_ms: u64,
}

impl MockTimeSource {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            tick_ms,
        }
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + self.tick_ms));
        current
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 1e-5;
    (a - b).abs() < EPSILON
}
