//! Differential tests: the engine against independent oracles.
//!
//! Two oracles keep the engine honest:
//!
//! - a Kruskal union-find run over a Rips-style edge sweep (insertions only,
//!   the degenerate case of ordinary persistence): dimension-0 deaths must
//!   coincide with the minimum-spanning-tree edges;
//! - a brute-force GF(2) rank computation of Betti numbers over small random
//!   zigzag filtrations: after every arrow, the number of independent cycle
//!   chains per dimension must equal the rank of homology of the current
//!   complex, and at the end the recorded intervals must cover each arrow
//!   index with exactly that multiplicity.

use std::collections::{BTreeSet, HashMap};

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zigzag_persistence::{Key, ZigzagPersistence};

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

#[test]
fn rips_edge_sweep_matches_kruskal() {
    let n = 12;
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen::<f64>() * 10.0, rng.gen::<f64>() * 10.0))
        .collect();

    let mut dist = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let dx = points[i].0 - points[j].0;
            let dy = points[i].1 - points[j].1;
            dist[[i, j]] = (dx * dx + dy * dy).sqrt();
        }
    }

    let mut edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    edges.sort_by(|a, b| dist[[a.0, a.1]].total_cmp(&dist[[b.0, b.1]]));

    // vertices at scale zero, then every edge in increasing distance order
    let mut zz = ZigzagPersistence::new(2);
    for v in 0..n {
        zz.insert_cell(v as Key, &[], 0, 0.0).unwrap();
    }
    let mut key = n as Key;
    for &(i, j) in &edges {
        zz.insert_cell(key, &[i as Key, j as Key], 1, dist[[i, j]])
            .unwrap();
        key += 1;
    }

    // Kruskal over the same sweep: the arrows of the accepted edges
    let mut uf = UnionFind::new(n);
    let mut accepted = BTreeSet::new();
    let mut k = n as Key;
    for &(i, j) in &edges {
        if uf.union(i, j) {
            accepted.insert(k);
        }
        k += 1;
    }
    assert_eq!(accepted.len(), n - 1);

    let bars: Vec<_> = zz.index_diagram().iter().filter(|iv| iv.dim == 0).collect();
    assert_eq!(bars.len(), n - 1);
    let deaths: BTreeSet<Key> = bars.iter().map(|iv| iv.death).collect();
    assert_eq!(deaths, accepted, "components must die on the MST edges");

    // elder rule: every vertex but the first dies exactly once
    let mut births: Vec<Key> = bars.iter().map(|iv| iv.birth).collect();
    births.sort_unstable();
    assert_eq!(births, (1..n as Key).collect::<Vec<_>>());

    // one component survives, born at the first vertex; every rejected edge
    // closed an independent 1-cycle
    let live_components: Vec<_> = zz
        .matrix()
        .iter()
        .filter(|(_, c)| c.is_f() && c.lowest() < n as Key)
        .collect();
    assert_eq!(live_components.len(), 1);
    assert_eq!(live_components[0].1.birth(), Some(0));
    let live_cycles = zz
        .matrix()
        .iter()
        .filter(|(_, c)| c.is_f() && c.lowest() >= n as Key)
        .count();
    assert_eq!(live_cycles, edges.len() - (n - 1));
}

#[derive(Clone)]
struct OracleCell {
    key: Key,
    dim: usize,
    boundary: Vec<Key>,
}

/// Ground-truth complex: Betti numbers by Gaussian elimination over GF(2).
#[derive(Default)]
struct Oracle {
    cells: Vec<OracleCell>,
}

impl Oracle {
    fn keys_of_dim(&self, dim: usize) -> Vec<Key> {
        self.cells
            .iter()
            .filter(|c| c.dim == dim)
            .map(|c| c.key)
            .collect()
    }

    fn is_maximal(&self, key: Key) -> bool {
        !self.cells.iter().any(|c| c.boundary.contains(&key))
    }

    /// Rank of the boundary operator from dimension `dim` to `dim - 1`.
    fn boundary_rank(&self, dim: usize) -> usize {
        if dim == 0 {
            return 0;
        }
        let faces = self.keys_of_dim(dim - 1);
        assert!(faces.len() <= 64, "oracle bitmask overflow");
        let index: HashMap<Key, u32> = faces
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i as u32))
            .collect();

        let mut pivots: HashMap<u32, u64> = HashMap::new();
        let mut rank = 0;
        for cell in self.cells.iter().filter(|c| c.dim == dim) {
            let mut col: u64 = 0;
            for face in &cell.boundary {
                col ^= 1 << index[face];
            }
            while col != 0 {
                let high = 63 - col.leading_zeros();
                match pivots.get(&high) {
                    Some(pivot) => col ^= pivot,
                    None => {
                        pivots.insert(high, col);
                        rank += 1;
                        break;
                    }
                }
            }
        }
        rank
    }

    fn betti(&self, dim: usize) -> usize {
        let n = self.cells.iter().filter(|c| c.dim == dim).count();
        n - self.boundary_rank(dim) - self.boundary_rank(dim + 1)
    }
}

/// Inserts a random cell: a vertex (at most six live at once), an edge
/// between unconnected vertices, or a triangle over three pairwise-connected
/// vertices (at most two per edge triple, so spheres can form). Returns
/// false if nothing can be inserted.
fn insert_random(
    rng: &mut StdRng,
    zz: &mut ZigzagPersistence,
    oracle: &mut Oracle,
    dims: &mut HashMap<Key, usize>,
) -> bool {
    let vertices = oracle.keys_of_dim(0);
    let mut edge_of: HashMap<(Key, Key), Key> = HashMap::new();
    for c in oracle.cells.iter().filter(|c| c.dim == 1) {
        edge_of.insert((c.boundary[0], c.boundary[1]), c.key);
    }

    let mut edge_cands: Vec<Vec<Key>> = Vec::new();
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            if !edge_of.contains_key(&(a, b)) {
                edge_cands.push(vec![a, b]);
            }
        }
    }

    let mut tri_cands: Vec<Vec<Key>> = Vec::new();
    for (i, &a) in vertices.iter().enumerate() {
        for (j, &b) in vertices.iter().enumerate().skip(i + 1) {
            for &c in &vertices[j + 1..] {
                let (ab, ac, bc) = (
                    edge_of.get(&(a, b)),
                    edge_of.get(&(a, c)),
                    edge_of.get(&(b, c)),
                );
                if let (Some(&ab), Some(&ac), Some(&bc)) = (ab, ac, bc) {
                    let mut boundary = vec![ab, ac, bc];
                    boundary.sort_unstable();
                    let copies = oracle
                        .cells
                        .iter()
                        .filter(|cell| cell.dim == 2 && cell.boundary == boundary)
                        .count();
                    if copies < 2 {
                        tri_cands.push(boundary);
                    }
                }
            }
        }
    }

    let mut kinds = Vec::new();
    if vertices.len() < 6 {
        kinds.push(0);
    }
    if !edge_cands.is_empty() {
        kinds.push(1);
    }
    if !tri_cands.is_empty() {
        kinds.push(2);
    }
    if kinds.is_empty() {
        return false;
    }
    let (dim, boundary) = match kinds[rng.gen_range(0..kinds.len())] {
        0 => (0, Vec::new()),
        1 => (1, edge_cands[rng.gen_range(0..edge_cands.len())].clone()),
        _ => (2, tri_cands[rng.gen_range(0..tri_cands.len())].clone()),
    };

    let key = zz.current_index() + 1;
    zz.insert_cell(key, &boundary, dim, key as f64).unwrap();
    oracle.cells.push(OracleCell { key, dim, boundary });
    dims.insert(key, dim);
    true
}

/// Removes a random maximal cell. Returns false if the complex is empty.
fn remove_random(rng: &mut StdRng, zz: &mut ZigzagPersistence, oracle: &mut Oracle) -> bool {
    let maximal: Vec<(Key, usize)> = oracle
        .cells
        .iter()
        .filter(|c| oracle.is_maximal(c.key))
        .map(|c| (c.key, c.dim))
        .collect();
    if maximal.is_empty() {
        return false;
    }
    let (key, dim) = maximal[rng.gen_range(0..maximal.len())];
    zz.remove_cell(key, dim, (zz.current_index() + 1) as f64)
        .unwrap();
    oracle.cells.retain(|c| c.key != key);
    true
}

/// After every arrow: the matrix invariants hold and the number of
/// independent cycle chains per dimension equals the oracle's Betti number.
fn check_state(
    zz: &ZigzagPersistence,
    oracle: &Oracle,
    dims: &HashMap<Key, usize>,
    history: &mut Vec<[usize; 3]>,
) {
    for (id, chain) in zz.matrix().iter() {
        assert_eq!(chain.column().iter().next_back(), Some(&chain.lowest()));
        assert_eq!(zz.matrix().chain_with_lowest(chain.lowest()), Some(id));
    }

    let mut live = [0usize; 3];
    for (_, chain) in zz.matrix().iter() {
        if chain.is_f() {
            live[dims[&chain.lowest()]] += 1;
        }
    }
    let betti = [oracle.betti(0), oracle.betti(1), oracle.betti(2)];
    assert_eq!(
        live,
        betti,
        "homology rank mismatch after arrow {}",
        zz.current_index()
    );
    history.push(betti);
}

#[test]
fn random_zigzag_matches_rank_oracle() {
    for seed in 0..10u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut zz = ZigzagPersistence::new(3);
        let mut oracle = Oracle::default();
        let mut dims: HashMap<Key, usize> = HashMap::new();
        let mut history: Vec<[usize; 3]> = Vec::new();

        for _ in 0..80 {
            let acted = if oracle.cells.is_empty() || rng.gen_bool(0.6) {
                insert_random(&mut rng, &mut zz, &mut oracle, &mut dims)
                    || remove_random(&mut rng, &mut zz, &mut oracle)
            } else {
                remove_random(&mut rng, &mut zz, &mut oracle)
                    || insert_random(&mut rng, &mut zz, &mut oracle, &mut dims)
            };
            assert!(acted, "seed {seed}: no feasible arrow");
            check_state(&zz, &oracle, &dims, &mut history);
        }

        // tear the complex down, one maximal cell at a time
        while !oracle.cells.is_empty() {
            assert!(remove_random(&mut rng, &mut zz, &mut oracle));
            check_state(&zz, &oracle, &dims, &mut history);
        }
        assert!(zz.matrix().is_empty(), "seed {seed}: chains left over");

        // the closed intervals must cover each arrow index with the Betti
        // multiplicity observed live at that arrow
        for (a, betti) in history.iter().enumerate() {
            let a = a as Key;
            for (d, &expected) in betti.iter().enumerate() {
                let covering = zz
                    .index_diagram()
                    .iter()
                    .filter(|iv| iv.dim == d && iv.birth <= a && a < iv.death)
                    .count();
                assert_eq!(covering, expected, "seed {seed}, arrow {a}, dim {d}");
            }
        }
    }
}
