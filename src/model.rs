//! In-memory Cobertura report hierarchy: coverage → package → class →
//! method → line. Built by the aggregator and consumed by the XML writer.

/// Compute a coverage rate. Returns NaN when `total` is zero; an empty
/// class or function is tolerated rather than rejected.
#[must_use]
pub fn rate(covered: u64, total: u64) -> f64 {
    covered as f64 / total as f64
}

/// A single statement's resolved line and hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub hits: u64,
}

/// A function, one `Line` per statement in statement order.
#[derive(Debug, Clone)]
pub struct MethodReport {
    pub name: String,
    pub line_rate: f64,
    pub line_count: u64,
    pub line_hits: u64,
    pub lines: Vec<Line>,
}

/// Functions sharing a receiver type (or `-` for package-level functions)
/// within one source file.
#[derive(Debug, Clone)]
pub struct ClassReport {
    pub name: String,
    pub filename: String,
    pub line_rate: f64,
    pub line_count: u64,
    pub line_hits: u64,
    pub methods: Vec<MethodReport>,
    /// Concatenation of the methods' lines. Not deduplicated.
    pub lines: Vec<Line>,
}

impl ClassReport {
    pub fn new(name: String, filename: String) -> Self {
        Self {
            name,
            filename,
            line_rate: 0.0,
            line_count: 0,
            line_hits: 0,
            methods: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Append a method, folding its lines and counters into the class.
    pub fn push_method(&mut self, method: MethodReport) {
        self.line_count += method.line_count;
        self.line_hits += method.line_hits;
        self.lines.extend_from_slice(&method.lines);
        self.methods.push(method);
    }
}

#[derive(Debug, Clone)]
pub struct PackageReport {
    pub name: String,
    pub line_rate: f64,
    pub line_count: u64,
    pub line_hits: u64,
    /// Class order carries no meaning.
    pub classes: Vec<ClassReport>,
}

/// Root of the report.
#[derive(Debug, Clone)]
pub struct Coverage {
    pub line_rate: f64,
    pub version: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub packages: Vec<PackageReport>,
}

impl Coverage {
    #[must_use]
    pub fn line_count(&self) -> u64 {
        self.packages.iter().map(|p| p.line_count).sum()
    }

    #[must_use]
    pub fn line_hits(&self) -> u64 {
        self.packages.iter().map(|p| p.line_hits).sum()
    }
}
