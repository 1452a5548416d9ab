use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::{
    backend::Graph,
    bfs::{bfs_groups, bfs_tree},
    errors::GraphResult,
    visit::{check_start, neighbors},
};

/// Connected components, each sorted, ordered by their smallest vertex.
/// Directed graphs are split into weakly connected components.
pub fn connected_components<G>(graph: &G) -> GraphResult<Vec<Vec<usize>>>
where
    G: Graph + ?Sized,
{
    let mut components = if graph.is_directed() {
        weak_components(graph)?
    } else {
        bfs_groups(graph)?
    };
    for component in components.iter_mut() {
        component.sort_unstable();
    }
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    Ok(components)
}

/// `(vertex, out-degree)` pairs, ties broken by vertex id.
pub fn nodes_by_degree<G>(graph: &G, descending: bool) -> GraphResult<Vec<(usize, usize)>>
where
    G: Graph + ?Sized,
{
    let mut degrees = Vec::with_capacity(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        let mut degree = 0;
        for next in neighbors(graph, v)? {
            next?;
            degree += 1;
        }
        degrees.push((v, degree));
    }
    degrees.sort_by(|a, b| {
        if descending {
            b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
        } else {
            a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0))
        }
    });
    Ok(degrees)
}

pub fn reachable<G>(graph: &G, from: usize, to: usize) -> GraphResult<bool>
where
    G: Graph + ?Sized,
{
    check_start(graph, to)?;
    Ok(bfs_tree(graph, from)?.contains(to))
}

fn weak_components<G>(graph: &G) -> GraphResult<Vec<Vec<usize>>>
where
    G: Graph + ?Sized,
{
    let mut adjacency: AHashMap<usize, Vec<usize>> = AHashMap::new();
    for v in 0..graph.vertex_count() {
        for next in neighbors(graph, v)? {
            let next = next?;
            adjacency.entry(v).or_default().push(next);
            adjacency.entry(next).or_default().push(v);
        }
    }
    let mut components = Vec::new();
    let mut visited = AHashSet::new();
    for id in 0..graph.vertex_count() {
        if !visited.insert(id) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &next in adjacency.get(&node).into_iter().flatten() {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    Ok(components)
}
