use clap::ValueEnum;

use graphwalk_core::graph::PathMetric;

/// Route metric as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Minimize the sum of edge weights
    Total,
    /// Minimize the highest single edge weight
    Bottleneck,
}

impl From<MetricArg> for PathMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Total => PathMetric::Total,
            MetricArg::Bottleneck => PathMetric::Bottleneck,
        }
    }
}
