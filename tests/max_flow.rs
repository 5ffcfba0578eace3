//! 最大流端到端测试

use flownet::algorithm::{max_flow_labeling, max_flow_residual, MinCut};
use flownet::import::{example_network, EXAMPLE_SINK, EXAMPLE_SOURCE};
use flownet::{Capacity, FlowNetwork, FordFulkerson, MaxFlow, NodeId, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn n(id: u64) -> NodeId {
    NodeId::new(id)
}

fn nodes(ids: &[u64]) -> Vec<NodeId> {
    ids.iter().copied().map(NodeId::new).collect()
}

fn run_both(network: &FlowNetwork, source: NodeId, sink: NodeId) -> (MaxFlow, MaxFlow) {
    let mut a = network.clone();
    let mut b = network.clone();
    let residual = max_flow_residual(&mut a, source, sink).unwrap();
    let labeling = max_flow_labeling(&mut b, source, sink).unwrap();
    (residual, labeling)
}

/// 原图中 S -> T 边的容量总和
fn crossing_capacity(network: &FlowNetwork, result: &MaxFlow) -> Capacity {
    network
        .edges()
        .filter(|(from, to, _)| {
            result.cut.source_side.contains(from) && result.cut.sink_side.contains(to)
        })
        .map(|(_, _, edge)| edge.capacity())
        .sum()
}

fn random_network(rng: &mut StdRng, node_count: u64) -> FlowNetwork {
    let mut g = FlowNetwork::new();
    // 保证源点和汇点存在
    g.add_edge(n(0), n(node_count - 1), 0);
    let edge_count = rng.gen_range(1..=node_count * 3);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from == to {
            continue;
        }
        g.add_edge(n(from), n(to), rng.gen_range(0..=10));
    }
    g
}

#[test]
fn test_scenario_a() {
    let g = FlowNetwork::from_edges([(1, 2, 3), (1, 3, 4), (2, 3, 1), (2, 4, 2), (3, 4, 5)]);
    let (residual, labeling) = run_both(&g, n(1), n(4));

    for result in [&residual, &labeling] {
        assert_eq!(result.value, 7);
        assert_eq!(result.source_side(), nodes(&[1]).as_slice());
        assert_eq!(result.sink_side(), nodes(&[2, 3, 4]).as_slice());
        assert_eq!(crossing_capacity(&g, result), result.value);
    }
}

#[test]
fn test_scenario_b_disconnected() {
    let g = FlowNetwork::from_edges([(1, 2, 3), (3, 4, 5)]);
    let (residual, labeling) = run_both(&g, n(1), n(4));

    for result in [&residual, &labeling] {
        assert_eq!(result.value, 0);
        assert!(result.iterations.is_empty());
        assert_eq!(result.source_side(), nodes(&[1, 2]).as_slice());
        assert_eq!(result.sink_side(), nodes(&[3, 4]).as_slice());
        assert_eq!(result.cut.capacity, 0);
    }
}

#[test]
fn test_scenario_b_isolated_source() {
    // 源点只有指向它的边，正向不可达任何节点
    let g = FlowNetwork::from_edges([(2, 1, 4), (2, 3, 4)]);
    let (residual, labeling) = run_both(&g, n(1), n(3));

    for result in [&residual, &labeling] {
        assert_eq!(result.value, 0);
        assert_eq!(result.source_side(), nodes(&[1]).as_slice());
        assert_eq!(result.sink_side(), nodes(&[2, 3]).as_slice());
    }
}

#[test]
fn test_scenario_c_single_edge() {
    let g = FlowNetwork::from_edges([(1, 2, 7)]);
    let (residual, labeling) = run_both(&g, n(1), n(2));

    for result in [&residual, &labeling] {
        assert_eq!(result.value, 7);
        assert_eq!(result.iterations.len(), 1);
        assert_eq!(result.iterations[0].delta, 7);
        assert_eq!(result.iterations[0].path, nodes(&[1, 2]));
        assert_eq!(result.source_side(), nodes(&[1]).as_slice());
        assert_eq!(result.sink_side(), nodes(&[2]).as_slice());
    }
}

#[test]
fn test_example_network() {
    let g = example_network();
    let (residual, labeling) = run_both(&g, EXAMPLE_SOURCE, EXAMPLE_SINK);

    for result in [&residual, &labeling] {
        assert_eq!(result.value, 29);
        assert_eq!(result.source_side(), nodes(&[1, 2, 4, 5, 6]).as_slice());
        assert_eq!(result.sink_side(), nodes(&[3, 7, 8, 9]).as_slice());
        assert_eq!(crossing_capacity(&g, result), 29);
    }

    // BFS 第一条路径边数最少
    assert_eq!(labeling.iterations[0].path, nodes(&[1, 2, 3, 8, 9]));
    assert_eq!(labeling.iterations[0].delta, 10);
}

#[test]
fn test_reverse_hops_needed() {
    // DFS 先走 1->3->... 后需要撤销 2->3 的流量才能达到最大流
    let g = FlowNetwork::from_edges([(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 3, 1), (2, 4, 1)]);
    let (residual, labeling) = run_both(&g, n(1), n(4));
    assert_eq!(residual.value, 2);
    assert_eq!(labeling.value, 2);
}

#[test]
fn test_node_zero_terminals() {
    let g = FlowNetwork::from_edges([(0, 1, 3), (1, 2, 2), (0, 2, 1)]);
    let (residual, labeling) = run_both(&g, n(0), n(2));
    assert_eq!(residual.value, 3);
    assert_eq!(labeling.value, 3);
}

#[test]
fn test_capacity_respected_at_every_iteration() {
    let g = example_network();
    let (residual, labeling) = run_both(&g, EXAMPLE_SOURCE, EXAMPLE_SINK);

    for result in [&residual, &labeling] {
        for it in &result.iterations {
            for (from, to, flow) in it.flow.iter() {
                assert!(flow <= g.capacity(from, to).unwrap());
            }
        }
    }
}

#[test]
fn test_flow_conservation_at_end() {
    let mut g = example_network();
    max_flow_residual(&mut g, EXAMPLE_SOURCE, EXAMPLE_SINK).unwrap();
    assert!(g.check_conservation(EXAMPLE_SOURCE, EXAMPLE_SINK).is_ok());

    for node in g.nodes() {
        if node == EXAMPLE_SOURCE || node == EXAMPLE_SINK {
            continue;
        }
        let (inflow, outflow) = g.throughput(node);
        assert_eq!(inflow, outflow, "node {}", node);
    }
}

#[test]
fn test_cut_extraction_idempotent() {
    let mut g = example_network();
    let result = max_flow_labeling(&mut g, EXAMPLE_SOURCE, EXAMPLE_SINK).unwrap();

    let again = MinCut::extract(&g, EXAMPLE_SOURCE).unwrap();
    assert_eq!(again, result.cut);
    assert_eq!(MinCut::extract(&g, EXAMPLE_SOURCE).unwrap(), again);
}

#[test]
fn test_iteration_deltas_sum_to_value() {
    let g = example_network();
    let (residual, labeling) = run_both(&g, EXAMPLE_SOURCE, EXAMPLE_SINK);
    for result in [&residual, &labeling] {
        let total: Capacity = result.iterations.iter().map(|it| it.delta).sum();
        assert_eq!(total, result.value);
        assert!(result.iterations.iter().all(|it| it.delta > 0));
    }
}

#[test]
fn test_strategies_agree_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..200 {
        let node_count = rng.gen_range(2..=9);
        let g = random_network(&mut rng, node_count);
        let source = n(0);
        let sink = n(node_count - 1);

        let (residual, labeling) = run_both(&g, source, sink);
        assert_eq!(residual.value, labeling.value, "round {}", round);

        for result in [&residual, &labeling] {
            // 对偶性
            assert_eq!(crossing_capacity(&g, result), result.value, "round {}", round);
            assert!(result.source_side().contains(&source));
            assert!(result.sink_side().contains(&sink));
            // 终止上界
            assert!(result.iterations.len() as u64 <= g.total_capacity_from(source));
        }
    }
}

#[test]
fn test_labeling_single_iteration_on_chain() {
    let g = FlowNetwork::from_edges([(1, 2, 5), (2, 3, 5), (3, 4, 5)]);
    let mut working = g.clone();
    let result = FordFulkerson::with_strategy(Strategy::Labeling)
        .run(&mut working, n(1), n(4))
        .unwrap();
    assert_eq!(result.iterations.len(), 1);
    assert_eq!(result.value, 5);
}

#[test]
fn test_original_network_untouched_when_cloned() {
    let g = example_network();
    let mut working = g.clone();
    max_flow_residual(&mut working, EXAMPLE_SOURCE, EXAMPLE_SINK).unwrap();

    assert!(g.edges().all(|(_, _, edge)| edge.flow() == 0));
    assert!(working.edges().any(|(_, _, edge)| edge.flow() > 0));
}
