//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::{Solver, SolverExt};
use std::collections::BTreeMap;

/// First year of Advent of Code
pub const BASE_YEAR: u16 = 2015;
/// Number of supported years (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Puzzle days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;

#[inline]
fn is_valid_year_day(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year)
        && (1..=DAYS_PER_YEAR as u8).contains(&day)
}

/// Factory turning an input string into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Rejects duplicate and out-of-calendar registrations; the registry it
/// builds is immutable.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct LineCount;
///
/// impl AocParser for LineCount {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for LineCount {
///     const PARTS: u8 = 1;
///
///     fn solve_part(lines: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(lines.to_string())
///     }
/// }
///
/// let builder = RegistryBuilder::new().register_solver::<LineCount>(2024, 1).unwrap();
/// assert!(builder.register_solver::<LineCount>(2024, 1).is_err());
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError::DuplicateSolver)` - Year-day already taken
    /// * `Err(RegistrationError::InvalidYearDay)` - Outside 2015-2034 / 1-25
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !is_valid_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        log::debug!("registering solver {}/day{:02} ({} parts)", year, day, parts);
        self.solvers.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    /// Register every plugin submitted through `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```ignore
    /// // Only grid puzzles
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))?
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            } else {
                log::trace!("skipping plugin {}/day{:02}", plugin.year, plugin.day);
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed instance
    /// * `Err(SolverError::InvalidYearDay)` - Outside the supported calendar
    /// * `Err(SolverError::NotFound)` - Nothing registered for that day
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !is_valid_year_day(year, day) {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Number of parts the solver for `year`/`day` supports
    pub fn parts(&self, year: u16, day: u8) -> Option<u8> {
        self.solvers.get(&(year, day)).map(|e| e.parts)
    }

    /// Registered `(year, day)` pairs in ascending order
    pub fn keys(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.solvers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe registration hook, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: SolverExt + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; can also be
/// submitted by hand:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2024,
///         day: 16,
///         solver: &Day16,
///         tags: &["grid", "search"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering (e.g. "grid", "dp", "math")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
