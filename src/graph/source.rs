//! Loading, querying and serializing category graph snapshots.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use oxrdf::{Graph, Triple, TripleRef};
use oxttl::{TurtleParser, TurtleSerializer};
use tempfile::NamedTempFile;

use crate::error::AppError;
use crate::graph::pattern::TriplePattern;
use crate::models::Category;
use crate::queries::CategoryTemplates;
use crate::vocab::blueprint;

/// One category session's graph snapshot.
///
/// Owns the in-memory graph for the lifetime of the session; queries
/// borrow it read-only and reconstruction derives a fresh graph.
#[derive(Debug)]
pub struct GraphSource {
    graph: Graph,
}

impl GraphSource {
    /// Load the category's input graph from the workspace directory.
    ///
    /// A missing (or unopenable) `_{category}.ttl` yields
    /// [`AppError::SourceNotFound`], which callers treat as an empty
    /// candidate list. A file that opens but does not parse as Turtle
    /// yields [`AppError::MalformedGraph`] and ends the session.
    pub fn load(dir: &Path, category: Category) -> Result<Self, AppError> {
        let path = dir.join(category.input_file());
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(_) => return Err(AppError::SourceNotFound { path }),
        };

        let mut graph = Graph::new();
        for result in TurtleParser::new().for_reader(BufReader::new(file)) {
            let triple = result.map_err(|source| AppError::MalformedGraph {
                path: path.clone(),
                source,
            })?;
            graph.insert(&triple);
        }

        tracing::debug!(
            path = %path.display(),
            triples = graph.len(),
            "graph source loaded"
        );
        Ok(Self { graph })
    }

    /// A snapshot with no triples, used when the category has no input file.
    pub fn empty() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Wrap an already-built graph as a snapshot.
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// The underlying triple store, for shape traversals.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every triple matching the pattern.
    ///
    /// Order is unspecified beyond triples of one subject staying
    /// adjacent; callers must not rely on anything finer.
    pub fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Triple> {
        self.graph
            .iter()
            .filter(|triple| pattern.matches(*triple))
            .map(TripleRef::into_owned)
            .collect()
    }

    /// Run the template's reconstruction parameterized by `selected`,
    /// returning a freshly derived subgraph. Entities that are neither
    /// selected nor referenced by a selected entity's owned structure
    /// are excluded; the source graph is left untouched.
    pub fn reconstruct(&self, template: &dyn CategoryTemplates, selected: &[String]) -> Graph {
        template.reconstruct(self, selected)
    }
}

/// Serialize a graph as prefixed Turtle to `path`.
///
/// The write is a whole-file replacement: the graph is serialized to a
/// temporary file in the target directory which is then renamed over
/// any previous file, so a failed write never corrupts prior output.
pub fn write_graph(graph: &Graph, path: &Path) -> Result<(), AppError> {
    let to_error = |source: std::io::Error| AppError::SubgraphWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut serializer = prefixed_serializer().for_writer(Vec::new());
    for triple in graph.iter() {
        serializer.serialize_triple(triple).map_err(to_error)?;
    }
    let bytes = serializer.finish().map_err(to_error)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_error)?;
    tmp.write_all(&bytes).map_err(to_error)?;
    tmp.persist(path).map_err(|err| to_error(err.error))?;
    Ok(())
}

/// Turtle serializer with the blueprint, rdf and rdfs prefixes registered.
fn prefixed_serializer() -> TurtleSerializer {
    TurtleSerializer::new()
        .with_prefix("blueprint", blueprint::NS)
        .and_then(|s| s.with_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"))
        .and_then(|s| s.with_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#"))
        .expect("vocabulary namespaces are valid IRIs")
}
