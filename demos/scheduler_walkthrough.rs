//! Walk one workload through every runqueue implementation.

use runqueue::{Runqueue, RunqueueConfig, RunqueueKind};

fn main() -> anyhow::Result<()> {
    let tasks = [("init", 0), ("shell", 40), ("editor", 25), ("compiler", 90), ("daemon", 25)];

    for kind in RunqueueKind::ALL {
        let mut queue = RunqueueConfig::new(kind).with_initial_capacity(4).build()?;
        for (label, vt) in tasks {
            queue.enqueue(label, vt);
        }

        print!("{kind:>5}: ");
        queue.print_all_processes(&mut std::io::stdout())?;
        println!(
            "       editor waits behind {} vt, {} vt queued after it",
            queue.preceding_process_time("editor").unwrap_or_default(),
            queue.succeeding_process_time("editor").unwrap_or_default()
        );

        let next = queue.dequeue().unwrap_or_default();
        println!("       next to run: {next} ({} left)", queue.len());
    }

    Ok(())
}
