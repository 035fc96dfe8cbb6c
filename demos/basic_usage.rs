//! Basic usage example for locmap
//!
//! This example walks through the whole API on one thread, then shares a
//! single map across several writer and reader threads.

use locmap::ConcurrentMap;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("locmap Usage Example");
    println!("====================");

    // Basic operations
    println!("\n1. Basic Operations:");
    let map = ConcurrentMap::new();

    map.set("name", "alice".to_string());
    map.add("name", "bob".to_string()); // no-op, "name" already present
    map.add("city", "berlin".to_string()); // inserts, "city" was absent

    println!("   name = {:?}", map.get("name"));
    println!("   city = {:?}", map.get("city"));
    println!("   has(\"name\") = {}", map.has("name"));

    map.delete("city");
    println!("   after delete: has(\"city\") = {}", map.has("city"));

    // Present-but-empty values still count as present
    println!("\n2. Presence vs. emptiness:");
    let optional: ConcurrentMap<Option<String>> = ConcurrentMap::new();
    optional.set("pending", None);
    println!("   get(\"pending\") = {:?}", optional.get("pending"));
    println!("   has(\"pending\") = {}", optional.has("pending"));
    println!("   get(\"missing\") = {:?}", optional.get("missing"));

    // Concurrent writers on disjoint keys
    println!("\n3. Concurrent Writers:");
    let shared: Arc<ConcurrentMap<usize>> = Arc::new(ConcurrentMap::new());

    let writers: Vec<_> = (0..4)
        .map(|writer_id| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..250 {
                    shared.set(format!("w{}_item{}", writer_id, i), writer_id * 1000 + i);
                }
                println!("   Writer {} done", writer_id);
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    println!("   Total entries: {}", shared.len());

    // Concurrent readers
    println!("\n4. Concurrent Readers:");
    let readers: Vec<_> = (0..4)
        .map(|reader_id| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut hits = 0;
                for writer_id in 0..4 {
                    for i in 0..250 {
                        if shared.has(&format!("w{}_item{}", writer_id, i)) {
                            hits += 1;
                        }
                    }
                }
                println!("   Reader {} observed {} entries", reader_id, hits);
            })
        })
        .collect();

    for reader in readers {
        reader.join().unwrap();
    }

    println!("\nDone.");
}
