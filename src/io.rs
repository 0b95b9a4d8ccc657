use crate::validation::DataValidator;
use crate::{Cluster, ClusterArray, Object, UpgmaError};
use num_traits::Float;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

const COUNT_PREFIX: &str = "count=";

/// Loads objects from the file at `path` into one single object cluster each.
///
/// The file starts with a `count=N` line followed by at least `N` lines of `ID X Y`. Only the
/// first `N` objects are read. See [`parse_clusters`] for the details.
pub fn load_clusters<T: Float>(
    path: impl AsRef<Path>,
    initial_capacity: usize,
) -> Result<ClusterArray<T>, UpgmaError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let clusters = parse_clusters(BufReader::new(file), initial_capacity)?;
    info!(path = %path.display(), objects = clusters.count(), "loaded clusters");
    Ok(clusters)
}

/// Parses objects from `reader` into one single object cluster each, in input order.
///
/// Blank lines are skipped. Every cluster is created with room for `initial_capacity` objects
/// (at least one).
///
/// # Returns
/// * The array of clusters, or an error if the header or any record is malformed, there are
///   fewer records than the header announces, a coordinate is not finite or two objects share
///   an id. No partial result is returned.
///
/// # Examples
/// ```
///use upgma::parse_clusters;
///
///let input = "count=2\n40 86 663\n43 747 938\n";
///let clusters = parse_clusters::<f64, _>(input.as_bytes(), 1).unwrap();
///assert_eq!(2, clusters.count());
///assert_eq!(43, clusters.clusters()[1].objects()[0].id);
/// ```
pub fn parse_clusters<T: Float, R: BufRead>(
    reader: R,
    initial_capacity: usize,
) -> Result<ClusterArray<T>, UpgmaError> {
    let mut lines = reader.lines().enumerate().map(|(n, line)| (n + 1, line));
    let mut last_line = 0;

    let (header_line, header) = match next_non_blank(&mut lines, &mut last_line)? {
        Some(header) => header,
        None => {
            return Err(input_error(
                last_line + 1,
                "unexpected end of input, missing `count=N` header",
            ))
        }
    };
    let expected = parse_count(header_line, &header)?;

    let capacity = initial_capacity.max(1);
    let mut clusters = ClusterArray::new();
    while clusters.count() < expected {
        let (n, line) = match next_non_blank(&mut lines, &mut last_line)? {
            Some(record) => record,
            None => {
                return Err(input_error(
                    last_line + 1,
                    &format!(
                        "unexpected end of input, expected {expected} objects, found {}",
                        clusters.count()
                    ),
                ))
            }
        };
        let mut cluster = Cluster::with_capacity(capacity)?;
        cluster.append(parse_object(n, &line)?)?;
        clusters.push(cluster)?;
    }

    let validator = DataValidator::new(&clusters);
    validator.validate_finite_coords()?;
    validator.validate_unique_ids()?;
    Ok(clusters)
}

/// Returns the next line holding anything but whitespace. `last_line` tracks the last physical
/// line read, blank or not.
fn next_non_blank<I>(
    lines: &mut I,
    last_line: &mut usize,
) -> Result<Option<(usize, String)>, UpgmaError>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    for (n, line) in lines {
        *last_line = n;
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some((n, line)));
        }
    }
    Ok(None)
}

fn parse_count(line_no: usize, line: &str) -> Result<usize, UpgmaError> {
    let value = line
        .trim()
        .strip_prefix(COUNT_PREFIX)
        .ok_or_else(|| input_error(line_no, "expected `count=N` header"))?;
    value
        .trim()
        .parse()
        .map_err(|_| input_error(line_no, &format!("invalid object count `{value}`")))
}

fn parse_object<T: Float>(line_no: usize, line: &str) -> Result<Object<T>, UpgmaError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, x, y] = fields[..] else {
        return Err(input_error(
            line_no,
            &format!("expected `ID X Y`, found {} field(s)", fields.len()),
        ));
    };
    let id = id
        .parse::<i32>()
        .map_err(|_| input_error(line_no, &format!("invalid object id `{id}`")))?;
    Ok(Object::new(id, parse_coord(line_no, x)?, parse_coord(line_no, y)?))
}

fn parse_coord<T: Float>(line_no: usize, field: &str) -> Result<T, UpgmaError> {
    field
        .parse::<f64>()
        .ok()
        .and_then(T::from)
        .ok_or_else(|| input_error(line_no, &format!("invalid coordinate `{field}`")))
}

fn input_error(line: usize, msg: &str) -> UpgmaError {
    UpgmaError::InputFormat { line, msg: msg.to_string() }
}

impl<T: Float + Display> Display for Object<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{},{}]", self.id, self.x, self.y)
    }
}

impl<T: Float + Display> Display for Cluster<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (n, object) in self.objects().iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{object}")?;
        }
        Ok(())
    }
}

/// Writes the objects of `cluster` in stored order on a single line.
pub fn print_cluster<T: Float + Display, W: Write>(
    writer: &mut W,
    cluster: &Cluster<T>,
) -> Result<(), UpgmaError> {
    writeln!(writer, "{cluster}")?;
    Ok(())
}

/// Writes every cluster of `clusters` on its own labelled line under a `Clusters:` heading.
///
/// # Examples
/// ```
///use upgma::{parse_clusters, print_clusters};
///
///let clusters = parse_clusters::<f32, _>("count=2\n1 0 0\n2 1.5 2\n".as_bytes(), 1).unwrap();
///let mut out = Vec::new();
///print_clusters(&mut out, &clusters).unwrap();
///assert_eq!("Clusters:\ncluster 0: 1[0,0]\ncluster 1: 2[1.5,2]\n", String::from_utf8(out).unwrap());
/// ```
pub fn print_clusters<T: Float + Display, W: Write>(
    writer: &mut W,
    clusters: &ClusterArray<T>,
) -> Result<(), UpgmaError> {
    writeln!(writer, "Clusters:")?;
    for (n, cluster) in clusters.iter().enumerate() {
        write!(writer, "cluster {n}: ")?;
        print_cluster(writer, cluster)?;
    }
    Ok(())
}
