use alloc::vec::Vec;

/// The direction of a zero crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolarity {
    Rising,
    Falling,
}

/// A timestamped sign transition of the input signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the sample on which the new sign state took effect,
    /// relative to the start of the current analysis span.
    pub index: usize,
    /// Interpolated crossing position in samples. Lies between
    /// `index - 1` and `index`.
    pub position: f32,
    pub polarity: EdgePolarity,
}

/// Sign state of a signal with hysteresis. The state switches to positive
/// as soon as the signal rises above zero, but only switches back to
/// negative once the signal falls below minus the hysteresis level, so
/// low level noise around zero cannot produce spurious transitions.
pub struct ZeroCross {
    hysteresis: f32,
    state: bool,
}

impl ZeroCross {
    pub fn new(hysteresis: f32) -> Self {
        if hysteresis <= 0.0 {
            panic!("Hysteresis must be greater than 0")
        }
        ZeroCross {
            hysteresis,
            state: false,
        }
    }

    pub fn update(&mut self, sample: f32) -> bool {
        if sample < -self.hysteresis {
            self.state = false;
        } else if sample > 0.0 {
            self.state = true;
        }
        self.state
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = false;
    }
}

/// Detects sign transitions of a sample stream and records them as
/// [Edge] values with interpolated sub-sample crossing positions.
///
/// The edge history is bounded: once `capacity` edges have been recorded
/// without an intervening [EdgeDetector::slide], further transitions
/// still update the sign state but are not recorded. A window with that
/// many transitions has no discernable pitch anyway.
pub struct EdgeDetector {
    zero_cross: ZeroCross,
    edges: Vec<Edge>,
    capacity: usize,
    sensitivity: Option<EdgePolarity>,
    previous_sample: f32,
}

impl EdgeDetector {
    /// Creates a detector recording edges of both polarities.
    pub fn new(hysteresis: f32, capacity: usize) -> Self {
        EdgeDetector::from_options(hysteresis, capacity, None)
    }

    /// `sensitivity` restricts recording to edges of the given polarity.
    /// `None` records both.
    pub fn from_options(
        hysteresis: f32,
        capacity: usize,
        sensitivity: Option<EdgePolarity>,
    ) -> Self {
        if capacity == 0 {
            panic!("Edge capacity must be greater than 0")
        }
        EdgeDetector {
            zero_cross: ZeroCross::new(hysteresis),
            edges: Vec::with_capacity(capacity),
            capacity,
            sensitivity,
            previous_sample: 0.0,
        }
    }

    /// Feeds one sample, recording an edge if the sign state changes.
    /// `index` is the position of the sample relative to the start of the
    /// current analysis span. Returns the sign state after the sample.
    pub fn update(&mut self, sample: f32, index: usize) -> bool {
        let previous_state = self.zero_cross.state();
        let state = self.zero_cross.update(sample);
        if state != previous_state {
            let polarity = if state {
                EdgePolarity::Rising
            } else {
                EdgePolarity::Falling
            };
            if self.records(polarity) && self.edges.len() < self.capacity {
                self.edges.push(Edge {
                    index,
                    position: self.crossing_position(sample, index, polarity),
                    polarity,
                });
            }
        }
        self.previous_sample = sample;
        state
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of recorded edges with the given polarity.
    pub fn edge_count(&self, polarity: EdgePolarity) -> usize {
        self.edges.iter().filter(|e| e.polarity == polarity).count()
    }

    /// Moves the analysis span forward by `amount` samples. Edge indices
    /// are translated accordingly and edges that fall before the new span
    /// are dropped.
    pub fn slide(&mut self, amount: usize) {
        let mut kept = 0;
        for i in 0..self.edges.len() {
            let edge = self.edges[i];
            if edge.index >= amount {
                self.edges[kept] = Edge {
                    index: edge.index - amount,
                    position: edge.position - amount as f32,
                    polarity: edge.polarity,
                };
                kept += 1;
            }
        }
        self.edges.truncate(kept);
    }

    pub fn reset(&mut self) {
        self.zero_cross.reset();
        self.edges.clear();
        self.previous_sample = 0.0;
    }

    fn records(&self, polarity: EdgePolarity) -> bool {
        match self.sensitivity {
            None => true,
            Some(recorded) => recorded == polarity,
        }
    }

    /// Linear interpolation of the crossing position between the previous
    /// sample and the one at `index`. Rising edges cross zero, falling
    /// edges cross minus the hysteresis level.
    fn crossing_position(&self, sample: f32, index: usize, polarity: EdgePolarity) -> f32 {
        let threshold = match polarity {
            EdgePolarity::Rising => 0.0,
            EdgePolarity::Falling => -self.zero_cross.hysteresis,
        };
        let previous_distance = self.previous_sample - threshold;
        let delta = self.previous_sample - sample;
        let fraction = if delta != 0.0 {
            previous_distance / delta
        } else {
            0.0
        };
        (index as f32 - 1.0) + fraction
    }
}
