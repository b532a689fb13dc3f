//! Solver registry: maps (year, day) to a factory that parses input into a
//! ready-to-solve [`DynSolver`]

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, Puzzle, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage covers (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Puzzle days per year
pub const DAYS_PER_YEAR: usize = 25;
/// Total slots in the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    if !(BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year) {
        return None;
    }
    if day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

#[inline]
fn year_day(slot: usize) -> (u16, u8) {
    (
        BASE_YEAR + (slot / DAYS_PER_YEAR) as u16,
        (slot % DAYS_PER_YEAR) as u8 + 1,
    )
}

/// Thread-safe factory producing a parsed solver for one input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a day without parsing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// Number of parts the solver declares
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for an immutable [`SolverRegistry`].
///
/// ```
/// use advent_kit::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl PuzzleParser for Echo {
///     type Shared<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::Shared<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2025, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2025, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create an empty builder with every slot vacant
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a raw factory for `year`/`day`.
    ///
    /// Fails if the slot is out of range or already taken.
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
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for `year`/`day`
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_tagged_solver::<S>(year, day, &[])
    }

    /// Like [`register_solver`](Self::register_solver), with tags exposed
    /// through [`DynSolver::puzzle`] on every instance
    pub fn register_tagged_solver<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let puzzle = Puzzle { year, day, tags };
        self.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(puzzle, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Register every plugin submitted through [`inventory`]
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the submitted plugins accepted by `filter`
    ///
    /// ```no_run
    /// use advent_kit::RegistryBuilder;
    ///
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Freeze the builder
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from (year, day) to solver factories
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Metadata for every registered day, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = year_day(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Metadata for one day, if registered
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let entry = self.entries.get(slot(year, day)?)?.as_ref()?;
        Some(FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Whether a solver is registered for `year`/`day`
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Number of registered days
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Object-safe hook letting a plugin register its concrete solver type.
///
/// Every [`Solver`] gets this through a blanket impl, so plugins can store
/// solvers of different types as `&'static dyn RegisterableSolver`.
pub trait RegisterableSolver: Sync {
    /// Register this solver for `year`/`day` under `tags`
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver declares
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_tagged_solver::<S>(year, day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Usually produced by `#[derive(RegisterSolver)]`; can be submitted by hand:
///
/// ```no_run
/// use advent_kit::{ParseError, PuzzleParser, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type Shared<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::Shared<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// advent_kit::inventory::submit! {
///     SolverPlugin { year: 2025, day: 1, solver: &Day1, tags: &["draft"] }
/// }
/// ```
pub struct SolverPlugin {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form tags used to filter which plugins get registered
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::PuzzleParser;

    struct Count;

    impl PuzzleParser for Count {
        type Shared<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Count {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_slot_roundtrip() {
        for index in [0, 24, 25, CAPACITY - 1] {
            let (year, day) = year_day(index);
            assert_eq!(slot(year, day), Some(index));
        }
        assert_eq!(slot(2014, 1), None);
        assert_eq!(slot(2035, 1), None);
        assert_eq!(slot(2025, 0), None);
        assert_eq!(slot(2025, 26), None);
    }

    #[test]
    fn test_register_and_create() {
        let registry = RegistryBuilder::new()
            .register_solver::<Count>(2025, 3)
            .unwrap()
            .build();

        assert!(registry.contains(2025, 3));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_info(2025, 3),
            Some(FactoryInfo {
                year: 2025,
                day: 3,
                parts: 2
            })
        );

        let mut solver = registry.create_solver(2025, 3, "ab\ncde").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "2");
        assert_eq!(solver.solve(2).unwrap().answer, "5");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_tags_reach_instances() {
        let registry = RegistryBuilder::new()
            .register_tagged_solver::<Count>(2025, 3, &["text", "easy"])
            .unwrap()
            .register_solver::<Count>(2025, 4)
            .unwrap()
            .build();

        let tagged = registry.create_solver(2025, 3, "a").unwrap();
        assert_eq!(tagged.puzzle().tags, &["text", "easy"]);
        assert!(registry.create_solver(2025, 4, "a").unwrap().puzzle().tags.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = RegistryBuilder::new()
            .register_solver::<Count>(2025, 3)
            .unwrap()
            .register_solver::<Count>(2025, 3);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2025, 3))
        ));
    }

    #[test]
    fn test_out_of_range_registration() {
        let result = RegistryBuilder::new().register_solver::<Count>(2025, 26);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2025, 26))
        ));
    }

    #[test]
    fn test_lookup_errors() {
        let registry = RegistryBuilder::new()
            .register_solver::<Count>(2025, 3)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2025, 4, "x"),
            Err(SolverError::NotFound(2025, 4))
        ));
        assert!(matches!(
            registry.create_solver(1999, 4, "x"),
            Err(SolverError::InvalidYearDay(1999, 4))
        ));
        assert!(matches!(
            registry.create_solver(2025, 3, ""),
            Err(SolverError::Parse(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_iter_info_ordered() {
        let registry = RegistryBuilder::new()
            .register_solver::<Count>(2025, 9)
            .unwrap()
            .register_solver::<Count>(2016, 2)
            .unwrap()
            .register_solver::<Count>(2025, 1)
            .unwrap()
            .build();

        let keys: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2016, 2), (2025, 1), (2025, 9)]);
    }
}
