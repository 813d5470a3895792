//! [`PixelSink`] adapter for `smart-leds` RGBW drivers.

use smart_leds::{RGBW, SmartLedsWrite, White};

use crate::config::Protocol;
use crate::sink::{PixelSink, StripBuffer};
use crate::wire::PackedColor;

/// Buffers a frame and writes it through a `smart-leds` driver on commit.
///
/// The driver is responsible for the wire byte order, so only the global
/// brightness is applied here. Write errors are dropped.
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    buffer: StripBuffer<N>,
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = RGBW<u8>>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: StripBuffer::new(Protocol::GRBW_800),
        }
    }

    /// Committed frame state.
    pub fn buffer(&self) -> &StripBuffer<N> {
        &self.buffer
    }

    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> PixelSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = RGBW<u8>>,
{
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.buffer.set_brightness(brightness);
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        self.buffer.set_pixel_color(index, color);
    }

    fn commit(&mut self) {
        self.buffer.commit();
        let buffer = &self.buffer;
        let pixels = (0..N).map(|index| {
            let [r, g, b, w] = buffer.scaled(index).unwrap_or(PackedColor::OFF).channels();
            RGBW { r, g, b, a: White(w) }
        });
        if self.writer.write(pixels).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("smart-leds write failed, frame dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::vec::Vec;

    /// Records every frame pushed through `write`.
    struct RecordingWriter {
        frames: Vec<Vec<RGBW<u8>>>,
        fail: bool,
    }

    impl RecordingWriter {
        fn new() -> Self {
            Self {
                frames: Vec::new(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                frames: Vec::new(),
                fail: true,
            }
        }
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = ();
        type Color = RGBW<u8>;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            if self.fail { Err(()) } else { Ok(()) }
        }
    }

    fn rgbw(r: u8, g: u8, b: u8, w: u8) -> RGBW<u8> {
        RGBW { r, g, b, a: White(w) }
    }

    #[test]
    fn nothing_is_written_before_commit() {
        let mut sink = SmartLedsSink::<_, 3>::new(RecordingWriter::new());
        sink.set_pixel_color(1, PackedColor::from_rgbw(1, 2, 3, 4));
        sink.fill(PackedColor::from_rgbw(9, 9, 9, 9));

        let writer = sink.release();
        assert!(writer.frames.is_empty());
    }

    #[test]
    fn commit_writes_every_pixel_with_white_channel() {
        let mut sink = SmartLedsSink::<_, 3>::new(RecordingWriter::new());
        sink.set_pixel_color(1, PackedColor::from_rgbw(10, 20, 30, 40));
        sink.commit();

        assert_eq!(sink.buffer().commits(), 1);
        let writer = sink.release();
        assert_eq!(writer.frames.len(), 1);
        assert_eq!(
            writer.frames[0],
            [rgbw(0, 0, 0, 0), rgbw(10, 20, 30, 40), rgbw(0, 0, 0, 0)]
        );
    }

    #[test]
    fn commit_applies_global_brightness() {
        let mut sink = SmartLedsSink::<_, 2>::new(RecordingWriter::new());
        sink.set_brightness(127);
        sink.fill(PackedColor::from_rgbw(255, 200, 0, 255));
        sink.commit();

        let writer = sink.release();
        assert_eq!(writer.frames[0], [rgbw(127, 100, 0, 127); 2]);
    }

    #[test]
    fn failed_write_keeps_sink_usable() {
        let mut sink = SmartLedsSink::<_, 2>::new(RecordingWriter::failing());
        sink.fill(PackedColor::from_rgbw(0, 0, 0, 5));
        sink.commit();
        sink.commit();

        assert_eq!(sink.buffer().commits(), 2);
        assert!(
            sink.buffer()
                .shown()
                .iter()
                .all(|c| *c == PackedColor::from_rgbw(0, 0, 0, 5))
        );
        assert_eq!(sink.release().frames.len(), 2);
    }
}
