//! Zigzag persistence demo: a triangle that closes, fills, and dissolves.
//!
//! ## Protocol
//!
//! 1. Insert three vertices and the three edges of a triangle
//! 2. Fill the triangle with a 2-cell, killing the 1-cycle
//! 3. Remove the 2-cell: the 1-cycle comes back
//! 4. Tear the complex down edge by edge, vertex by vertex
//! 5. Print the index intervals, the resolved barcode and engine statistics

use zigzag_persistence::{CountingObserver, ZigzagPersistence};

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Zigzag Persistence: Oscillating Triangle");
    println!("═══════════════════════════════════════════════════════════════\n");

    let mut zz = ZigzagPersistence::with_observer(2, CountingObserver::new());

    // Growth phase: vertices at value 0, edges at 1, the 2-cell at 2
    println!("Growth phase:");
    for key in 0..3 {
        zz.insert_cell(key, &[], 0, 0.0).expect("vertex insertion");
        println!("  -> insert vertex {key}");
    }
    for (key, (a, b)) in [(3, (0, 1)), (4, (0, 2)), (5, (1, 2))] {
        zz.insert_cell(key, &[a, b], 1, 1.0).expect("edge insertion");
        println!("  -> insert edge {key} = ({a}, {b})");
    }
    zz.insert_cell(6, &[3, 4, 5], 2, 2.0).expect("triangle insertion");
    println!("  -> insert triangle 6 = (3, 4, 5)");

    // Shrink phase: the filtration value keeps rising as cells leave
    println!("\nShrink phase:");
    zz.remove_cell(6, 2, 3.0).expect("triangle removal");
    println!("  <- remove triangle 6 (the 1-cycle is reborn)");
    for key in [3, 4, 5] {
        zz.remove_cell(key, 1, 4.0).expect("edge removal");
        println!("  <- remove edge {key}");
    }
    for key in [0, 1, 2] {
        zz.remove_cell(key, 0, 5.0).expect("vertex removal");
        println!("  <- remove vertex {key}");
    }
    assert!(zz.matrix().is_empty());

    println!("\n───────────────────────────────────────────────────────────────");
    println!("Index intervals (half-open, over arrow indices):");
    for iv in zz.index_diagram() {
        println!("  dim {}: [{}, {})", iv.dim, iv.birth, iv.death);
    }

    println!("\nResolved barcode:");
    zz.write_diagram(std::io::stdout().lock(), 0.0)
        .expect("write diagram");

    let stats = zz.observer();
    println!("\nEngine statistics:");
    println!("  forward arrows:    {}", stats.forward_arrows);
    println!("  backward arrows:   {}", stats.backward_arrows);
    println!("  column additions:  {}", stats.column_additions);
    println!("  mean column size:  {:.2}", stats.mean_column_length());
    println!("  transpositions:    {}", stats.total_transpositions());
    println!(
        "  worst removal:     {} transpositions",
        stats.max_transpositions_per_removal
    );

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Done");
    println!("═══════════════════════════════════════════════════════════════");
}
