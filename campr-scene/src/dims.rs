use serde::Serialize;

/// Pixel margins around a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed geometry of the inset (detail) chart and the small multiples.
///
/// The same margin is applied around the inset and around each panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDimensions {
    pub inset_width: f64,
    pub inset_height: f64,
    pub panel_width: f64,
    pub panel_height: f64,
    pub margin: Margin,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            inset_width: 500.0,
            inset_height: 300.0,
            panel_width: 100.0,
            panel_height: 50.0,
            margin: Margin {
                top: 20.0,
                right: 5.0,
                bottom: 10.0,
                left: 5.0,
            },
        }
    }
}

impl ChartDimensions {
    /// Outer (svg) size of the inset.
    pub fn inset_outer(&self) -> (f64, f64) {
        (
            self.inset_width + self.margin.left + self.margin.right,
            self.inset_height + self.margin.top + self.margin.bottom,
        )
    }

    /// Outer (svg) size of one small multiple.
    pub fn panel_outer(&self) -> (f64, f64) {
        (
            self.panel_width + self.margin.left + self.margin.right,
            self.panel_height + self.margin.top + self.margin.bottom,
        )
    }

    /// Translation of a panel's contents inside its svg.
    pub fn panel_offset(&self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }

    /// Y of the demand chart's baseline and month axis.
    pub fn demand_baseline(&self) -> f64 {
        self.inset_height * 0.5
    }

    /// Y of the booking chart's top axis.
    pub fn booking_axis_y(&self) -> f64 {
        self.inset_height * 0.58
    }
}

#[cfg(test)]
mod tests {
    use super::ChartDimensions;

    #[test]
    fn test_default_outer_sizes() {
        let dims = ChartDimensions::default();
        assert_eq!(dims.inset_outer(), (510.0, 330.0));
        assert_eq!(dims.panel_outer(), (110.0, 80.0));
        assert_eq!(dims.panel_offset(), (5.0, 20.0));
    }

    #[test]
    fn test_inset_guides() {
        let dims = ChartDimensions::default();
        assert_eq!(dims.demand_baseline(), 150.0);
        assert_eq!(dims.booking_axis_y(), 174.0);
    }
}
