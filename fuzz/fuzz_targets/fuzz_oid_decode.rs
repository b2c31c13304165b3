#![no_main]

use libfuzzer_sys::fuzz_target;

use ifalias_persist::codec;
use ifalias_persist::oid::Oid;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(oid) = Oid::parse(s) {
        assert_eq!(Oid::parse(&oid.to_string()).unwrap(), oid);
    }

    // Any accepted instance must survive an encode/decode cycle
    if let Ok(index) = codec::decode(s) {
        assert_eq!(codec::decode(&codec::encode(index).to_string()).unwrap(), index);
    }
});
