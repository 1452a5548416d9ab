//! Depth-first traversals.
//!
//! [`dfs`] and [`dfs_complete`] recurse on the call stack and return the
//! pre-order. [`dfs_explicit`] and [`dfs_explicit_complete`] run on an
//! explicit frame stack and report entry and exit of every vertex to a
//! [`DfsVisitor`]; a vertex is left only after every neighbor that was
//! unvisited when it got there has been entered and left.

use serde::{Deserialize, Serialize};

use crate::{
    backend::Graph,
    errors::GraphResult,
    visit::{VisitMap, check_start, neighbors, write_marks},
};

/// Entry / exit hooks for [`dfs_explicit`].
pub trait DfsVisitor {
    fn pre_visit(&mut self, _vertex: usize) {}
    fn post_visit(&mut self, _vertex: usize) {}
}

impl<V> DfsVisitor for &mut V
where
    V: DfsVisitor + ?Sized,
{
    fn pre_visit(&mut self, vertex: usize) {
        (**self).pre_visit(vertex)
    }

    fn post_visit(&mut self, vertex: usize) {
        (**self).post_visit(vertex)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DfsEvent {
    Enter(usize),
    Leave(usize),
}

/// Records every hook call in order.
impl DfsVisitor for Vec<DfsEvent> {
    fn pre_visit(&mut self, vertex: usize) {
        self.push(DfsEvent::Enter(vertex));
    }

    fn post_visit(&mut self, vertex: usize) {
        self.push(DfsEvent::Leave(vertex));
    }
}

/// Visitor built from a pair of closures.
pub struct Hooks<Pre, Post> {
    pre: Pre,
    post: Post,
}

pub fn hooks<Pre, Post>(pre: Pre, post: Post) -> Hooks<Pre, Post>
where
    Pre: FnMut(usize),
    Post: FnMut(usize),
{
    Hooks { pre, post }
}

impl<Pre, Post> DfsVisitor for Hooks<Pre, Post>
where
    Pre: FnMut(usize),
    Post: FnMut(usize),
{
    fn pre_visit(&mut self, vertex: usize) {
        (self.pre)(vertex)
    }

    fn post_visit(&mut self, vertex: usize) {
        (self.post)(vertex)
    }
}

/// Recursive pre-order from `start`.
///
/// Recursion depth grows with the longest path explored, so very deep graphs
/// (long chains) can exhaust the thread stack. Use [`dfs_explicit`] for those.
pub fn dfs<G>(graph: &G, start: usize) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    check_start(graph, start)?;
    #[cfg(feature = "logging")]
    log::trace!("dfs from vertex {start}");
    let mut visited = VisitMap::for_graph(graph);
    let mut order = Vec::new();
    descend(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

/// Pre-order over every component, roots taken in ascending id order.
/// Recurses like [`dfs`]; [`dfs_explicit_complete`] has no depth limit.
pub fn dfs_complete<G>(graph: &G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let (order, _) = complete(graph)?;
    Ok(order)
}

pub fn dfs_explicit<G, V>(graph: &G, start: usize, visitor: &mut V) -> GraphResult<()>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    check_start(graph, start)?;
    let mut visited = VisitMap::for_graph(graph);
    explore(graph, start, &mut visited, visitor)
}

pub fn dfs_explicit_complete<G, V>(graph: &G, visitor: &mut V) -> GraphResult<()>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    explore_all(graph, visitor).map(|_| ())
}

/// [`dfs`] that leaves visited vertices marked `1` in the graph.
pub fn dfs_marked<G>(graph: &mut G, start: usize) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    check_start(&*graph, start)?;
    let mut visited = VisitMap::for_graph(&*graph);
    let mut order = Vec::new();
    descend(&*graph, start, &mut visited, &mut order)?;
    write_marks(graph, &visited)?;
    Ok(order)
}

pub fn dfs_complete_marked<G>(graph: &mut G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let (order, visited) = complete(&*graph)?;
    write_marks(graph, &visited)?;
    Ok(order)
}

pub fn dfs_explicit_marked<G, V>(graph: &mut G, start: usize, visitor: &mut V) -> GraphResult<()>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    check_start(&*graph, start)?;
    let mut visited = VisitMap::for_graph(&*graph);
    explore(&*graph, start, &mut visited, visitor)?;
    write_marks(graph, &visited)
}

pub fn dfs_explicit_complete_marked<G, V>(graph: &mut G, visitor: &mut V) -> GraphResult<()>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    let visited = explore_all(&*graph, visitor)?;
    write_marks(graph, &visited)
}

fn complete<G>(graph: &G) -> GraphResult<(Vec<usize>, VisitMap)>
where
    G: Graph + ?Sized,
{
    let mut visited = VisitMap::for_graph(graph);
    let mut order = Vec::with_capacity(graph.vertex_count());
    for root in 0..graph.vertex_count() {
        if visited.all_visited() {
            break;
        }
        if !visited.is_visited(root) {
            descend(graph, root, &mut visited, &mut order)?;
        }
    }
    Ok((order, visited))
}

fn descend<G>(
    graph: &G,
    v: usize,
    visited: &mut VisitMap,
    order: &mut Vec<usize>,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
{
    visited.visit(v);
    order.push(v);
    for next in neighbors(graph, v)? {
        let next = next?;
        if !visited.is_visited(next) {
            descend(graph, next, visited, order)?;
        }
    }
    Ok(())
}

fn explore_all<G, V>(graph: &G, visitor: &mut V) -> GraphResult<VisitMap>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    let mut visited = VisitMap::for_graph(graph);
    for root in 0..graph.vertex_count() {
        if visited.all_visited() {
            break;
        }
        if !visited.is_visited(root) {
            explore(graph, root, &mut visited, visitor)?;
        }
    }
    Ok(visited)
}

struct Frame {
    vertex: usize,
    last: Option<usize>,
}

fn explore<G, V>(graph: &G, root: usize, visited: &mut VisitMap, visitor: &mut V) -> GraphResult<()>
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    #[cfg(feature = "logging")]
    log::trace!("dfs with hooks from vertex {root}");
    visited.visit(root);
    visitor.pre_visit(root);
    let mut stack = vec![Frame {
        vertex: root,
        last: None,
    }];
    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let next = match frame.last {
            None => graph.first_neighbor(vertex)?,
            Some(w) => graph.next_neighbor(vertex, w)?,
        };
        match next {
            Some(w) => {
                frame.last = Some(w);
                if visited.visit(w) {
                    visitor.pre_visit(w);
                    stack.push(Frame {
                        vertex: w,
                        last: None,
                    });
                }
            }
            None => {
                stack.pop();
                visitor.post_visit(vertex);
            }
        }
    }
    #[cfg(feature = "logging")]
    log::trace!("dfs with hooks from vertex {root} done");
    Ok(())
}
