use std::io::Write;

use algorithms::{time_greedy, time_search, validation, Measurement, Timed, DEFAULT_MAX_STEP};
use rand::Rng;
use tracing::{debug, info};

use crate::report::CsvReport;
use crate::Error;

pub const SIZES: [usize; 7] = [1_000, 2_000, 5_000, 10_000, 20_000, 50_000, 100_000];
pub const TRIALS: usize = 20;
/// Fairly dense forest.
pub const TREE_PROBABILITY: f64 = 0.9;
/// Avoid 5 consecutive trees.
pub const RUN_LENGTH: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    sizes: Vec<usize>,
    trials: usize,
    tree_probability: f64,
    run_length: usize,
    max_step: u64,
}

impl Config {
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Same preconditions the algorithms enforce per call, checked up front.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("no input sizes".into()));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be at least 1".into()));
        }
        validation::run_length(self.run_length)?;
        validation::probability(self.tree_probability)?;
        validation::max_step(self.max_step)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: SIZES.to_vec(),
            trials: TRIALS,
            tree_probability: TREE_PROBABILITY,
            run_length: RUN_LENGTH,
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmKind {
    Greedy,
    /// Divide and conquer: the threshold binary search.
    Dnc,
}

impl AlgorithmKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Greedy => "greedy",
            AlgorithmKind::Dnc => "dnc",
        }
    }
}

/// Averages over the trials of one (size, algorithm) pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub avg_time_ms: f64,
    /// Truncated toward zero.
    pub avg_ops: u64,
    pub avg_result: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExperimentRow {
    pub n: usize,
    pub algorithm: AlgorithmKind,
    pub summary: Summary,
}

/// Draws `trials` samples and folds them into their means.
pub fn summarize<R, F>(trials: usize, mut sample: F) -> Result<Summary, Error>
where
    R: Measurement,
    F: FnMut() -> Result<Timed<R>, algorithms::Error>,
{
    if trials == 0 {
        return Err(Error::InvalidConfig("trials must be at least 1".into()));
    }

    let (time_ms, ops, result) = (0..trials).try_fold((0.0, 0.0, 0.0), |(t, o, r), _| {
        let timed = sample()?;
        Ok::<_, Error>((
            t + timed.elapsed.as_secs_f64() * 1000.0,
            o + timed.result.ops() as f64,
            r + timed.result.value(),
        ))
    })?;

    let trials = trials as f64;
    Ok(Summary {
        avg_time_ms: time_ms / trials,
        avg_ops: (ops / trials) as u64,
        avg_result: result / trials,
    })
}

/// Runs every size in order, greedy then dnc, appending each row to `report`
/// as soon as it is ready and noting each finished size on `progress`.
///
/// `cfg` is expected to have passed [`Config::validate`]; an invalid
/// parameter otherwise surfaces from the first trial that uses it.
pub fn run<G, W, P>(
    cfg: &Config,
    rng: &mut G,
    report: &mut CsvReport<W>,
    progress: &mut P,
) -> Result<Vec<ExperimentRow>, Error>
where
    G: Rng + ?Sized,
    W: Write,
    P: Write,
{
    info!(sizes = cfg.sizes.len(), trials = cfg.trials, "experiments_start");

    let mut rows = Vec::with_capacity(cfg.sizes.len() * 2);
    for &n in &cfg.sizes {
        let greedy = summarize(cfg.trials, || {
            time_greedy(rng, n, cfg.run_length, cfg.tree_probability)
        })?;
        let row = ExperimentRow { n, algorithm: AlgorithmKind::Greedy, summary: greedy };
        report.write_row(&row)?;
        rows.push(row);

        let dnc = summarize(cfg.trials, || time_search(rng, n, cfg.max_step))?;
        let row = ExperimentRow { n, algorithm: AlgorithmKind::Dnc, summary: dnc };
        report.write_row(&row)?;
        rows.push(row);

        debug!(n, greedy_ms = greedy.avg_time_ms, dnc_ms = dnc.avg_time_ms, "size_done");
        writeln!(progress, "Completed n={}", n).map_err(Error::Progress)?;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorithms::{GreedyResult, SearchResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn greedy_sample(removals: u64, operations: u64, ms: u64) -> Timed<GreedyResult> {
        Timed {
            result: GreedyResult { removals, operations },
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_summarize_means() {
        let mut samples = vec![greedy_sample(3, 10, 2), greedy_sample(4, 11, 4)].into_iter();
        let summary = summarize(2, || Ok(samples.next().unwrap())).unwrap();
        assert!((summary.avg_time_ms - 3.0).abs() < 1e-9);
        assert_eq!(summary.avg_ops, 10); // 10.5 truncated
        assert!((summary.avg_result - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_search_miss_counts_as_minus_one() {
        let mut samples = vec![
            SearchResult { index: None, queries: 3, operations: 3 },
            SearchResult { index: Some(5), queries: 3, operations: 3 },
        ]
        .into_iter();
        let summary = summarize(2, || {
            Ok(Timed { result: samples.next().unwrap(), elapsed: Duration::ZERO })
        })
        .unwrap();
        assert!((summary.avg_result - 2.0).abs() < 1e-9);
        assert_eq!(summary.avg_ops, 3);
    }

    #[test]
    fn test_summarize_stops_on_error() {
        let mut calls = 0;
        let err = summarize::<GreedyResult, _>(5, || {
            calls += 1;
            Err(algorithms::Error::InvalidRunLength(0))
        });
        assert!(matches!(err, Err(Error::Algorithm(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_summarize_zero_trials() {
        let err = summarize(0, || Ok(greedy_sample(0, 0, 0)));
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_run_writes_pair_per_size() {
        let cfg = Config { sizes: vec![10, 100], trials: 3, ..Config::default() };
        let mut rng = StdRng::seed_from_u64(9);
        let mut report = CsvReport::new(Vec::new()).unwrap();
        let mut progress = Vec::new();

        let rows = run(&cfg, &mut rng, &mut report, &mut progress).unwrap();

        let kinds: Vec<_> = rows.iter().map(|r| (r.n, r.algorithm)).collect();
        assert_eq!(
            kinds,
            vec![
                (10, AlgorithmKind::Greedy),
                (10, AlgorithmKind::Dnc),
                (100, AlgorithmKind::Greedy),
                (100, AlgorithmKind::Dnc),
            ]
        );
        for row in &rows {
            assert!(row.summary.avg_time_ms.is_finite() && row.summary.avg_time_ms >= 0.0);
        }
        assert_eq!(rows[0].summary.avg_ops, 10);
        assert_eq!(rows[2].summary.avg_ops, 100);
        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "Completed n=10\nCompleted n=100\n"
        );

        let csv = String::from_utf8(report.finish().unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 5);
    }

    #[test]
    fn test_run_stops_at_first_bad_trial() {
        let cfg = Config { run_length: 0, ..Config::default() };
        let mut rng = StdRng::seed_from_u64(0);
        let mut report = CsvReport::new(Vec::new()).unwrap();
        let mut progress = Vec::new();

        let err = run(&cfg, &mut rng, &mut report, &mut progress);
        assert!(matches!(err, Err(Error::Algorithm(algorithms::Error::InvalidRunLength(0)))));
        assert!(progress.is_empty());
        assert_eq!(String::from_utf8(report.finish().unwrap()).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());
        let no_sizes = Config { sizes: Vec::new(), ..Config::default() };
        assert!(matches!(no_sizes.validate(), Err(Error::InvalidConfig(_))));
        let no_trials = Config { trials: 0, ..Config::default() };
        assert!(matches!(no_trials.validate(), Err(Error::InvalidConfig(_))));
        let zero_k = Config { run_length: 0, ..Config::default() };
        assert!(matches!(
            zero_k.validate(),
            Err(Error::Algorithm(algorithms::Error::InvalidRunLength(0)))
        ));
        let dense = Config { tree_probability: 1.2, ..Config::default() };
        assert!(matches!(
            dense.validate(),
            Err(Error::Algorithm(algorithms::Error::InvalidProbability(_)))
        ));
        let flat = Config { max_step: 0, ..Config::default() };
        assert!(matches!(
            flat.validate(),
            Err(Error::Algorithm(algorithms::Error::InvalidStep(0)))
        ));
    }
}
