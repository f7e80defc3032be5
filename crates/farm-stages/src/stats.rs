//! Monotonic production/consumption counters and their lock-protected board.

use std::sync::{Mutex, PoisonError};

/// The free-form observability counters.  Write-only from stage transitions,
/// read-only from the reporter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BakeryStats {
    pub eggs_laid: u64,
    pub eggs_used: u64,
    pub butter_produced: u64,
    pub butter_used: u64,
    pub flour_produced: u64,
    pub flour_used: u64,
    pub sugar_produced: u64,
    pub sugar_used: u64,
    pub cakes_produced: u64,
    pub cakes_sold: u64,
}

impl std::fmt::Display for BakeryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BakeryStats:")?;
        writeln!(f, "  eggs_laid:        {}", self.eggs_laid)?;
        writeln!(f, "  eggs_used:        {}", self.eggs_used)?;
        writeln!(f, "  butter_produced:  {}", self.butter_produced)?;
        writeln!(f, "  butter_used:      {}", self.butter_used)?;
        writeln!(f, "  flour_produced:   {}", self.flour_produced)?;
        writeln!(f, "  flour_used:       {}", self.flour_used)?;
        writeln!(f, "  sugar_produced:   {}", self.sugar_produced)?;
        writeln!(f, "  sugar_used:       {}", self.sugar_used)?;
        writeln!(f, "  cakes_produced:   {}", self.cakes_produced)?;
        write!(f, "  cakes_sold:       {}", self.cakes_sold)
    }
}

/// Shared counter board.
#[derive(Default)]
pub struct StatsBoard {
    inner: Mutex<BakeryStats>,
}

macro_rules! record {
    ($($fn_name:ident => $field:ident),+ $(,)?) => {
        $(
            pub fn $fn_name(&self, n: u64) {
                self.inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .$field += n;
            }
        )+
    };
}

impl StatsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    record! {
        record_eggs_laid       => eggs_laid,
        record_eggs_used       => eggs_used,
        record_butter_produced => butter_produced,
        record_butter_used     => butter_used,
        record_flour_produced  => flour_produced,
        record_flour_used      => flour_used,
        record_sugar_produced  => sugar_produced,
        record_sugar_used      => sugar_used,
        record_cakes_produced  => cakes_produced,
        record_cakes_sold      => cakes_sold,
    }

    /// Copy out the current counters.
    pub fn read(&self) -> BakeryStats {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
