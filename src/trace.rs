use std::hash::{Hash, Hasher};

/// A point in the edit graph. `x` indexes the source sequence, `y` the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

/// A single step recorded by the diff algorithm while it searches the edit
/// graph. `d` is the edit distance at which the step was discovered. See the
/// [paper](http://www.xmailserver.org/diff2.pdf) for more information on traces.
///
/// Coordinates are signed because frontier seeding can produce transient
/// points one step left of the graph; such traces never lie on an optimal path.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    pub from: Point,
    pub to: Point,
    pub d: usize,
}

// Two traces describing the same edge are the same trace, whatever the edit
// distance they were recorded at.
impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Trace {}

impl Hash for Trace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraceKind {
    Insertion,
    Deletion,
    MatchPoint,
}

impl Trace {
    pub(crate) fn kind(&self) -> TraceKind {
        if self.from.x + 1 == self.to.x && self.from.y + 1 == self.to.y {
            TraceKind::MatchPoint
        } else if self.from.y < self.to.y {
            TraceKind::Insertion
        } else {
            TraceKind::Deletion
        }
    }
}

/// Generates all traces visited while searching for the shortest edit script
/// between `from` and `to`.
///
/// Complexity: O((N+M)*D) time and space for the frontier array.
pub fn diff_traces<T, F>(from: &[T], to: &[T], is_equal: F) -> Vec<Trace>
where
    F: Fn(&T, &T) -> bool,
{
    if from.is_empty() && to.is_empty() {
        Vec::new()
    } else if from.is_empty() {
        insertion_traces(to.len())
    } else if to.is_empty() {
        deletion_traces(from.len())
    } else {
        myers_traces(from, to, &is_equal)
    }
}

/// Returns only the traces which mark the shortest diff path, in path order.
pub fn diff_path_traces<T, F>(from: &[T], to: &[T], is_equal: F) -> Vec<Trace>
where
    F: Fn(&T, &T) -> bool,
{
    find_path(&diff_traces(from, to, is_equal))
}

fn deletion_traces(n: usize) -> Vec<Trace> {
    (0..n as isize)
        .map(|x| Trace {
            from: Point::new(x, 0),
            to: Point::new(x + 1, 0),
            d: 0,
        })
        .collect()
}

fn insertion_traces(m: usize) -> Vec<Trace> {
    (0..m as isize)
        .map(|y| Trace {
            from: Point::new(0, y),
            to: Point::new(0, y + 1),
            d: 0,
        })
        .collect()
}

fn myers_traces<T, F>(from: &[T], to: &[T], is_equal: &F) -> Vec<Trace>
where
    F: Fn(&T, &T) -> bool,
{
    let n = from.len() as isize;
    let m = to.len() as isize;
    let mut traces = Vec::new();

    // N+M is an upper bound on the edit distance, so the search always
    // terminates within the frontier below.
    let max = n + m;

    let mut frontier = vec![-1_isize; max as usize + 1];
    frontier[m as usize + 1] = 0;

    for d in 0..=max {
        let mut k = -d;
        while k <= d {
            if k >= -m && k <= n {
                let index = (k + m) as usize;
                let previous_x = index
                    .checked_sub(1)
                    .and_then(|i| frontier.get(i))
                    .copied();
                let next_x = frontier.get(index + 1).copied();

                let trace = next_trace(d, k, previous_x, next_x);
                if trace.to.x <= n && trace.to.y <= m {
                    let mut x = trace.to.x;
                    let mut y = trace.to.y;

                    traces.push(trace);

                    // keep going as long as they match on diagonal k
                    while x >= 0
                        && y >= 0
                        && x < n
                        && y < m
                        && is_equal(&from[x as usize], &to[y as usize])
                    {
                        x += 1;
                        y += 1;
                        traces.push(Trace {
                            from: Point::new(x - 1, y - 1),
                            to: Point::new(x, y),
                            d: d as usize,
                        });
                    }

                    frontier[index] = x;

                    if x >= n && y >= m {
                        return traces;
                    }
                }
            }
            k += 2;
        }
    }

    Vec::new()
}

fn next_trace(d: isize, k: isize, previous_x: Option<isize>, next_x: Option<isize>) -> Trace {
    if next_step_is_insertion(d, k, previous_x, next_x) {
        let x = next_x.unwrap_or(-1);
        Trace {
            from: Point::new(x, x - k - 1),
            to: Point::new(x, x - k),
            d: d as usize,
        }
    } else {
        let x = previous_x.unwrap_or(0) + 1;
        Trace {
            from: Point::new(x - 1, x - k),
            to: Point::new(x, x - k),
            d: d as usize,
        }
    }
}

// Insertion when k == -D, or when k != D and the predecessor diagonal reaches
// less far than the successor. The tie-break keeps the output deterministic:
// deletions win at equal distance.
fn next_step_is_insertion(
    d: isize,
    k: isize,
    previous_x: Option<isize>,
    next_x: Option<isize>,
) -> bool {
    if k == -d {
        true
    } else if k != d {
        matches!((previous_x, next_x), (Some(prev), Some(next)) if prev < next)
    } else {
        false
    }
}

/// Walks the accumulated traces backwards from the end state, keeping only the
/// traces forming one optimal path. Empty input yields an empty path.
pub(crate) fn find_path(traces: &[Trace]) -> Vec<Trace> {
    let Some(&last) = traces.last() else {
        return Vec::new();
    };

    let mut path = vec![last];
    let mut item = last;

    if item.from != Point::ORIGIN {
        for &trace in traces.iter().rev() {
            if trace.to == item.from {
                path.push(trace);
                item = trace;

                if trace.from == Point::ORIGIN {
                    break;
                }
            }
        }
    }

    path.reverse();
    path
}
