use {
    serde::{Deserialize, Serialize},
    tracing::{debug, trace, warn},
};

use crate::{
    env::{Environment, ProcessEnv},
    error::{Error, Result},
    rule::reference_name,
    shape::{Mapping, Record, Sequence, Shape, StringSlot, Substitute},
};

/// Walk settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum nesting depth. `None` walks structures of any depth.
    pub max_depth: Option<usize>,
}

impl Options {
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Counters collected over one or more walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// String leaves reached.
    pub strings: usize,
    /// Leaves that were `$NAME` references and got replaced.
    pub substituted: usize,
    /// Replaced references whose variable was unset or empty.
    pub unresolved: usize,
}

/// Recursive dispatcher over [`Shape`]s.
///
/// Holds no state besides the environment, the options and the running
/// [`Report`], so one walker can be reused for several roots.
pub struct Walker<'env> {
    env: &'env dyn Environment,
    options: Options,
    depth: usize,
    report: Report,
}

impl<'env> Walker<'env> {
    pub fn new(env: &'env dyn Environment, options: Options) -> Self {
        Self {
            env,
            options,
            depth: 0,
            report: Report::default(),
        }
    }

    pub fn report(&self) -> Report {
        self.report
    }

    /// Substitute every reachable string leaf of `value` in place.
    ///
    /// Stops at the first error; anything already substituted stays so.
    pub fn visit(&mut self, value: &mut dyn Substitute) -> Result<()> {
        if let Some(limit) = self.options.max_depth
            && self.depth >= limit
        {
            warn!(limit, "nesting limit reached, aborting walk");
            return Err(Error::DepthLimitExceeded { limit });
        }
        self.depth += 1;
        let result = self.dispatch(value.shape());
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, mut shape: Shape<'_>) -> Result<()> {
        loop {
            match shape {
                Shape::Reference(None) => return Ok(()),
                Shape::Reference(Some(target)) => shape = target.shape(),
                Shape::String(slot) => {
                    self.visit_string(slot);
                    return Ok(());
                },
                Shape::Record(record) => return self.visit_record(record),
                Shape::Sequence(sequence) => return self.visit_sequence(sequence),
                Shape::Mapping(mapping) => return self.visit_mapping(mapping),
                Shape::Opaque => return Ok(()),
            }
        }
    }

    fn visit_string(&mut self, slot: &mut dyn StringSlot) {
        self.report.strings += 1;
        let Some(name) = reference_name(slot.read()) else {
            return;
        };
        let value = self.env.lookup(name).unwrap_or_default();
        if value.is_empty() {
            debug!(var = name, "variable unset or empty, substituting empty string");
            self.report.unresolved += 1;
        } else {
            trace!(var = name, "substituted variable");
        }
        self.report.substituted += 1;
        slot.write(value);
    }

    fn visit_record(&mut self, record: &mut dyn Record) -> Result<()> {
        for field in record.fields() {
            if !field.is_writable() {
                trace!(field = field.name, "skipping read-only field");
                continue;
            }
            self.visit(field.value)?;
        }
        Ok(())
    }

    fn visit_sequence(&mut self, sequence: &mut dyn Sequence) -> Result<()> {
        for index in 0..sequence.len() {
            if let Some(element) = sequence.element(index) {
                self.visit(element)?;
            }
        }
        Ok(())
    }

    fn visit_mapping(&mut self, mapping: &mut dyn Mapping) -> Result<()> {
        mapping.rewrite_values(&mut |copy| self.visit(copy))
    }
}

/// Substitute `$NAME` strings in `root` from the process environment.
pub fn run<T: Substitute>(root: &mut T) -> Result<Report> {
    run_with(root, &ProcessEnv, &Options::default())
}

/// Substitute `$NAME` strings in `root` from `env`.
pub fn run_with<T: Substitute>(
    root: &mut T,
    env: &dyn Environment,
    options: &Options,
) -> Result<Report> {
    let mut walker = Walker::new(env, options.clone());
    walker.visit(root)?;
    let report = walker.report();
    debug!(
        strings = report.strings,
        substituted = report.substituted,
        unresolved = report.unresolved,
        "environment substitution complete"
    );
    Ok(report)
}
