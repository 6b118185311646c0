//! Parameter checks shared by the algorithms and their callers.

use crate::Error;

pub fn run_length(k: usize) -> Result<(), Error> {
    if k == 0 {
        return Err(Error::InvalidRunLength(k));
    }
    Ok(())
}

pub fn probability(p: f64) -> Result<(), Error> {
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidProbability(p));
    }
    Ok(())
}

pub fn max_step(step: u64) -> Result<(), Error> {
    if step == 0 {
        return Err(Error::InvalidStep(step));
    }
    Ok(())
}
