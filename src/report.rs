//! Human-readable win/loss summaries.

use crate::tournament::Standings;

/// Renders each value as `value/total (pct%)`, joined by `", "`.
///
/// The total is the sum of all values; an empty total shows `0.0%`.
pub fn ratio_string(values: &[usize]) -> String {
    let total: usize = values.iter().sum();
    values
        .iter()
        .map(|&value| {
            let pct = if total > 0 {
                100.0 * value as f64 / total as f64
            } else {
                0.0
            };
            format!("{value}/{total} ({pct:.1}%)")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl Standings {
    /// Win rate of `index` as a fraction in `[0, 1]`.
    pub fn win_rate(&self, index: usize) -> f64 {
        if self.games_per_strategy == 0 {
            return 0.0;
        }
        self.wins[index] as f64 / self.games_per_strategy as f64
    }

    /// Wins and losses for one strategy.
    pub fn ratio_line(&self, index: usize) -> String {
        ratio_string(&[self.wins[index], self.losses(index)])
    }

    /// One line per strategy of a threshold family, where index `k` stays at `k`.
    pub fn report_lines(&self) -> Vec<String> {
        (0..self.len())
            .map(|k| format!("Wins, losses staying at k = {k:>4}: {}", self.ratio_line(k)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_string_two_values() {
        assert_eq!(ratio_string(&[3, 1]), "3/4 (75.0%), 1/4 (25.0%)");
        assert_eq!(ratio_string(&[1, 2]), "1/3 (33.3%), 2/3 (66.7%)");
    }

    #[test]
    fn test_ratio_string_zero_total() {
        assert_eq!(ratio_string(&[0, 0]), "0/0 (0.0%), 0/0 (0.0%)");
        assert_eq!(ratio_string(&[]), "");
    }

    #[test]
    fn test_report_lines() {
        let standings = Standings {
            wins: vec![2, 8],
            games_per_series: 10,
            games_per_strategy: 10,
        };
        let lines = standings.report_lines();
        assert_eq!(
            lines[0],
            "Wins, losses staying at k =    0: 2/10 (20.0%), 8/10 (80.0%)"
        );
        assert_eq!(
            lines[1],
            "Wins, losses staying at k =    1: 8/10 (80.0%), 2/10 (20.0%)"
        );
        assert!((standings.win_rate(1) - 0.8).abs() < 1e-9);
    }
}
