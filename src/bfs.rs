use std::collections::VecDeque;

use crate::{
    backend::Graph,
    errors::GraphResult,
    visit::{VisitMap, check_start, neighbors, write_marks},
};

/// Breadth-first visitation order from `start`.
///
/// A neighbor is marked visited the moment it is enqueued, so a vertex
/// reached along several edges is queued once.
pub fn bfs<G>(graph: &G, start: usize) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    check_start(graph, start)?;
    let mut visited = VisitMap::for_graph(graph);
    let mut order = Vec::new();
    walk(graph, start, &mut visited, &mut order, |_, _| {})?;
    Ok(order)
}

/// BFS over every component: a new walk starts from each still-unvisited
/// vertex in ascending id order, so each component's vertices are contiguous.
pub fn bfs_complete<G>(graph: &G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let (order, _) = complete(graph)?;
    Ok(order)
}

/// Same groups as [`bfs_complete`], one `Vec` per walk.
pub(crate) fn bfs_groups<G>(graph: &G) -> GraphResult<Vec<Vec<usize>>>
where
    G: Graph + ?Sized,
{
    let mut visited = VisitMap::for_graph(graph);
    let mut groups = Vec::new();
    for root in 0..graph.vertex_count() {
        if visited.all_visited() {
            break;
        }
        if visited.is_visited(root) {
            continue;
        }
        let mut group = Vec::new();
        walk(graph, root, &mut visited, &mut group, |_, _| {})?;
        groups.push(group);
    }
    Ok(groups)
}

/// Breadth-first tree rooted at `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsTree {
    root: usize,
    order: Vec<usize>,
    parent: Vec<Option<usize>>,
    depth: Vec<Option<usize>>,
}

impl BfsTree {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Parent of `v` in the tree. The root is its own parent.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }

    /// Number of edges between the root and `v`.
    pub fn depth(&self, v: usize) -> Option<usize> {
        self.depth.get(v).copied().flatten()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.parent(v).is_some()
    }

    /// Vertices from the root to `target` along tree edges.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.contains(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.root {
            current = self.parent(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

pub fn bfs_tree<G>(graph: &G, start: usize) -> GraphResult<BfsTree>
where
    G: Graph + ?Sized,
{
    check_start(graph, start)?;
    let n = graph.vertex_count();
    let mut visited = VisitMap::new(n);
    let mut parent = vec![None; n];
    let mut depth = vec![None; n];
    parent[start] = Some(start);
    depth[start] = Some(0);
    let mut order = Vec::new();
    walk(graph, start, &mut visited, &mut order, |from, to| {
        parent[to] = Some(from);
        depth[to] = depth[from].map(|d| d + 1);
    })?;
    Ok(BfsTree {
        root: start,
        order,
        parent,
        depth,
    })
}

/// Fewest-edges path from `start` to `end`, ties broken by neighbor order.
pub fn shortest_path<G>(graph: &G, start: usize, end: usize) -> GraphResult<Option<Vec<usize>>>
where
    G: Graph + ?Sized,
{
    check_start(graph, start)?;
    check_start(graph, end)?;
    if start == end {
        return Ok(Some(vec![start]));
    }
    Ok(bfs_tree(graph, start)?.path_to(end))
}

/// [`bfs`] that leaves visited vertices marked `1` in the graph.
pub fn bfs_marked<G>(graph: &mut G, start: usize) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    check_start(&*graph, start)?;
    let mut visited = VisitMap::for_graph(&*graph);
    let mut order = Vec::new();
    walk(&*graph, start, &mut visited, &mut order, |_, _| {})?;
    write_marks(graph, &visited)?;
    Ok(order)
}

/// [`bfs_complete`] that leaves every vertex marked `1` in the graph.
pub fn bfs_complete_marked<G>(graph: &mut G) -> GraphResult<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let (order, visited) = complete(&*graph)?;
    write_marks(graph, &visited)?;
    Ok(order)
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
            walk(graph, root, &mut visited, &mut order, |_, _| {})?;
        }
    }
    Ok((order, visited))
}

fn walk<G, F>(
    graph: &G,
    start: usize,
    visited: &mut VisitMap,
    order: &mut Vec<usize>,
    mut discovered: F,
) -> GraphResult<()>
where
    G: Graph + ?Sized,
    F: FnMut(usize, usize),
{
    #[cfg(feature = "logging")]
    log::trace!("bfs from vertex {start}");
    let mut queue = VecDeque::new();
    visited.visit(start);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for next in neighbors(graph, v)? {
            let next = next?;
            if visited.visit(next) {
                discovered(v, next);
                queue.push_back(next);
            }
        }
    }
    #[cfg(feature = "logging")]
    log::trace!("bfs from vertex {start} done, {} visited", visited.visited_count());
    Ok(())
}
