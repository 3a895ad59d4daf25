use crate::sampler::SamplerSnapshot;

/// Text line showing the running frequency estimate and last position
#[derive(Debug, Clone)]
pub struct StatusReadout {
    text: String,
}

impl Default for StatusReadout {
    fn default() -> Self {
        Self {
            text: format_status(&SamplerSnapshot::default()),
        }
    }
}

impl StatusReadout {
    pub fn update(&mut self, snapshot: &SamplerSnapshot) {
        self.text = format_status(snapshot);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

pub fn format_status(snapshot: &SamplerSnapshot) -> String {
    format!(
        "Average Frequency: {:.2} Hz, count:{}, x:{:.0}, y:{:.0}",
        snapshot.frequency_hz, snapshot.count, snapshot.position.x, snapshot.position.y
    )
}
