pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 5.0;

/// Drag state between pointer down and pointer up.
///
/// The anchor is the time grabbed at pointer down. Each move records the time
/// now under the pointer; the pan that puts the anchor back under the pointer
/// is `anchor_time - pointer_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    anchor_x: f64,
    anchor_time: f64,
    pointer: Option<(f64, f64)>,
    panning: bool,
}

impl PanGesture {
    #[must_use]
    pub fn start(anchor_x: f64, anchor_time: f64) -> Self {
        Self {
            anchor_x,
            anchor_time,
            pointer: None,
            panning: false,
        }
    }

    #[must_use]
    pub fn anchor_time(self) -> f64 {
        self.anchor_time
    }

    /// Whether the pointer ever left the click threshold; sticky once set.
    #[must_use]
    pub fn is_panning(self) -> bool {
        self.panning
    }

    /// Records a pointer move. Returns `true` when there is new pan work to
    /// resolve.
    pub fn update(&mut self, x: f64, time: f64, threshold_px: f64) -> bool {
        if (x - self.anchor_x).abs() > threshold_px {
            self.panning = true;
        }
        if !self.panning || self.pointer == Some((x, time)) {
            return false;
        }
        self.pointer = Some((x, time));
        true
    }

    /// Time delta still owed to the view; zero once consumed.
    #[must_use]
    pub fn pending_delta(self) -> f64 {
        match self.pointer {
            Some((_, time)) if self.panning => self.anchor_time - time,
            _ => 0.0,
        }
    }

    /// Takes the pending delta, leaving the gesture settled at the anchor.
    pub fn take_delta(&mut self) -> Option<f64> {
        let delta = self.pending_delta();
        if delta == 0.0 || !delta.is_finite() {
            return None;
        }
        if let Some((x, _)) = self.pointer {
            self.pointer = Some((x, self.anchor_time));
        }
        Some(delta)
    }
}
