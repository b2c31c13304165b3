#![no_main]

use libfuzzer_sys::fuzz_target;

use ifalias_persist::directory::MemoryDirectory;
use ifalias_persist::handler::Engine;

fuzz_target!(|data: &[u8]| {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    let directory = MemoryDirectory::new()
        .with_interface(1, "Loopback")
        .with_interface(3, "Production")
        .with_interface(4, "Internal");
    let engine = Engine::new(directory);

    // Arbitrary input may end the loop with an error, but must never panic
    let mut output = Vec::new();
    let _ = runtime.block_on(engine.run(data, &mut output));
});
