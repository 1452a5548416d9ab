use markgraph::{
    DfsEvent, EdgeListGraph, Graph, GraphConfig, MatrixGraph, open_graph,
    algo::connected_components,
    bfs::{bfs, bfs_complete, shortest_path},
    dfs::{dfs, dfs_complete, dfs_explicit},
};

fn main() {
    if let Err(err) = run() {
        eprintln!("traversal_walkthrough error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut matrix = MatrixGraph::undirected(5)?;
    for (a, b, w) in [(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 3)] {
        matrix.set_edge(a, b, w)?;
    }
    print!("{matrix}");
    println!("edge (0,1): {}", matrix.is_edge(0, 1)?);
    println!("edge (0,4): {}", matrix.is_edge(0, 4)?);
    println!("weight (1,4): {}", matrix.weight(1, 4)?);
    println!("neighbors of 1: {:?}", matrix.neighbor_list(1)?);
    matrix.delete_edge(1, 2)?;
    println!("after deleting (1,2): {} edges", matrix.edge_count());

    let mut directed = EdgeListGraph::directed(4)?;
    for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
        directed.set_edge(a, b, 1)?;
    }
    print!("{directed}");
    println!(
        "out-degree of 0: {}, in-degree of 3: {}",
        directed.degree(0)?,
        directed.in_degree(3)?
    );
    println!("path 0 -> 3: {:?}", shortest_path(&directed, 0, 3)?);

    let mut tree = open_graph(&GraphConfig::matrix(8))?;
    for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (3, 7), (4, 7)] {
        tree.set_edge(a, b, 1)?;
    }
    println!("bfs from 0: {:?}", bfs(&tree, 0)?);
    println!("dfs from 0: {:?}", dfs(&tree, 0)?);
    println!("dfs from 3: {:?}", dfs(&tree, 3)?);

    let mut events: Vec<DfsEvent> = Vec::new();
    dfs_explicit(&tree, 0, &mut events)?;
    for event in &events {
        match event {
            DfsEvent::Enter(v) => println!("  enter {v}"),
            DfsEvent::Leave(v) => println!("  leave {v}"),
        }
    }

    let mut forest = open_graph(&GraphConfig::edge_list(6))?;
    for (a, b) in [(0, 1), (1, 2), (3, 4), (4, 5)] {
        forest.set_edge(a, b, 1)?;
    }
    println!("bfs complete: {:?}", bfs_complete(&forest)?);
    println!("dfs complete: {:?}", dfs_complete(&forest)?);
    println!("components: {:?}", connected_components(&forest)?);
    Ok(())
}
