//! The poll / update / draw / pace cycle

use crate::{Canvas, Color, FrameClock, InputPort, LoopState, Position};

/// Default circle radius in pixels
pub const DEFAULT_RADIUS: u32 = 20;

/// How the circle and background are drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub radius: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }
}

/// What the caller should do after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Run another frame
    Continue,
    /// The running flag was cleared; do not run another frame
    Exit,
}

/// Owns the loop state and pacing, and drives one frame per call
#[derive(Debug)]
pub struct GameLoop {
    state: LoopState,
    clock: FrameClock,
    style: CircleStyle,
    frames: u64,
}

impl GameLoop {
    /// Create a loop from its state, pacing and style
    pub fn new(state: LoopState, clock: FrameClock, style: CircleStyle) -> Self {
        Self {
            state,
            clock,
            style,
            frames: 0,
        }
    }

    /// Current loop state
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Circle center that the next frame will start from
    pub fn position(&self) -> Position {
        self.state.position()
    }

    /// Whether another frame should run
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    ///
    /// 1. Drain pending key presses and apply them in order
    /// 2. Clear to the background color
    /// 3. Fill the circle at the current position
    /// 4. Present
    /// 5. Sleep out the rest of the frame budget
    ///
    /// The frame that sees Escape is still drawn; the outcome then says to stop.
    /// A failed present is still paced before its error is returned. The applied
    /// input is kept, but the frame is not counted.
    pub fn frame<I, C>(&mut self, input: &mut I, canvas: &mut C) -> Result<FrameOutcome, C::Error>
    where
        I: InputPort + ?Sized,
        C: Canvas + ?Sized,
    {
        self.state.apply_keys(input.drain_key_presses());

        canvas.clear(self.style.background);
        canvas.fill_circle(self.state.position(), self.style.radius, self.style.foreground);
        let presented = canvas.present();

        self.clock.tick();
        presented?;
        self.frames += 1;

        if self.state.is_running() {
            Ok(FrameOutcome::Continue)
        } else {
            Ok(FrameOutcome::Exit)
        }
    }

    /// Run frames until the running flag is cleared
    ///
    /// Returns the total number of frames run. Blocks the calling thread.
    pub fn run<I, C>(&mut self, input: &mut I, canvas: &mut C) -> Result<u64, C::Error>
    where
        I: InputPort + ?Sized,
        C: Canvas + ?Sized,
    {
        while self.state.is_running() {
            if self.frame(input, canvas)? == FrameOutcome::Exit {
                break;
            }
        }
        log::info!("Loop finished after {} frames", self.frames);
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Key;

    /// Canvas that counts calls and remembers the last circle
    #[derive(Default)]
    struct CountingCanvas {
        clears: usize,
        presents: usize,
        last_circle: Option<(Position, u32)>,
        fail_present: bool,
    }

    impl Canvas for CountingCanvas {
        type Error = &'static str;

        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, center: Position, radius: u32, _color: Color) {
            self.last_circle = Some((center, radius));
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            if self.fail_present {
                return Err("lost");
            }
            self.presents += 1;
            Ok(())
        }
    }

    fn uncapped_loop() -> GameLoop {
        GameLoop::new(LoopState::new(800, 600), FrameClock::new(0), CircleStyle::default())
    }

    #[test]
    fn test_frame_draws_once() {
        let mut game = uncapped_loop();
        let mut canvas = CountingCanvas::default();
        let outcome = game.frame(&mut Vec::new(), &mut canvas).unwrap();

        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.presents, 1);
        assert_eq!(canvas.last_circle, Some((Position::new(400, 300), DEFAULT_RADIUS)));
        assert_eq!(game.frame_count(), 1);
    }

    #[test]
    fn test_escape_frame_is_drawn_then_exit() {
        let mut game = uncapped_loop();
        let mut canvas = CountingCanvas::default();
        let mut input = vec![Key::Down, Key::Escape];

        let outcome = game.frame(&mut input, &mut canvas).unwrap();
        assert_eq!(outcome, FrameOutcome::Exit);
        assert_eq!(canvas.presents, 1);
        assert_eq!(canvas.last_circle, Some((Position::new(400, 305), DEFAULT_RADIUS)));
        assert!(!game.is_running());
    }

    #[test]
    fn test_present_error_keeps_input() {
        let mut game = uncapped_loop();
        let mut canvas = CountingCanvas {
            fail_present: true,
            ..Default::default()
        };
        let mut input = vec![Key::Left];

        assert_eq!(game.frame(&mut input, &mut canvas), Err("lost"));
        assert_eq!(game.position(), Position::new(395, 300));
        assert_eq!(game.frame_count(), 0);
    }

    #[test]
    fn test_run_returns_frame_count() {
        let mut game = uncapped_loop();
        let mut canvas = CountingCanvas::default();
        let mut input = vec![Key::Escape];

        assert_eq!(game.run(&mut input, &mut canvas), Ok(1));
        assert_eq!(canvas.presents, 1);
    }
}
