use quern::{hash, hash_keyed, hash_simple, hash_wiping, Params, ThreadMode, Variant};

/// The reference scenario inputs: 32 bytes of 0x01 as password, 16 bytes
/// of 0x02 as salt, 8 bytes of 0x03 as secret, 12 bytes of 0x04 as
/// associated data, t_cost 3, m_cost 32, 4 lanes, 32-byte tag.
const PWD: [u8; 32] = [0x01; 32];
const SALT: [u8; 16] = [0x02; 16];
const SECRET: [u8; 8] = [0x03; 8];
const AD: [u8; 12] = [0x04; 12];

fn scenario_params(lanes: u32, thread_mode: ThreadMode) -> Params {
    Params {
        mem_cost: 32,
        time_cost: 3,
        lanes,
        tag_len: 32,
        thread_mode,
        clear_memory: false,
    }
}

fn scenario_tag(variant: Variant) -> Vec<u8> {
    let params = scenario_params(4, ThreadMode::Sequential);
    hash_keyed(variant, &PWD, &SALT, &SECRET, &AD, &params).unwrap()
}

#[test]
fn is_deterministic() {
    let a = scenario_tag(Variant::Argon2d);
    let b = scenario_tag(Variant::Argon2d);
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
}

#[test]
fn variants_produce_distinct_tags() {
    let variants = [
        Variant::Argon2d,
        Variant::Argon2i,
        Variant::Argon2di,
        Variant::Argon2id,
        Variant::Argon2ds,
    ];
    let tags: Vec<Vec<u8>> = variants.iter().map(|&v| scenario_tag(v)).collect();
    for i in 0..tags.len() {
        for j in (i + 1)..tags.len() {
            assert_ne!(
                tags[i], tags[j],
                "{:?} and {:?} collided",
                variants[i], variants[j]
            );
        }
    }
}

#[test]
fn parallel_matches_sequential() {
    for variant in [
        Variant::Argon2d,
        Variant::Argon2i,
        Variant::Argon2di,
        Variant::Argon2id,
        Variant::Argon2ds,
    ] {
        let sequential = hash_keyed(
            variant,
            &PWD,
            &SALT,
            &SECRET,
            &AD,
            &scenario_params(4, ThreadMode::Sequential),
        )
        .unwrap();
        let pooled = hash_keyed(
            variant,
            &PWD,
            &SALT,
            &SECRET,
            &AD,
            &scenario_params(4, ThreadMode::Parallel),
        )
        .unwrap();
        assert_eq!(sequential, pooled, "{variant:?} diverged across executors");
    }
}

#[test]
fn time_cost_changes_the_tag() {
    let mut slower = scenario_params(4, ThreadMode::Sequential);
    slower.time_cost = 4;
    let a = scenario_tag(Variant::Argon2d);
    let b = hash_keyed(Variant::Argon2d, &PWD, &SALT, &SECRET, &AD, &slower).unwrap();
    assert_ne!(a, b);
}

#[test]
fn memory_cost_changes_the_tag() {
    let mut bigger = scenario_params(4, ThreadMode::Sequential);
    bigger.mem_cost = 64;
    let a = scenario_tag(Variant::Argon2d);
    let b = hash_keyed(Variant::Argon2d, &PWD, &SALT, &SECRET, &AD, &bigger).unwrap();
    assert_ne!(a, b);
}

#[test]
fn lane_count_changes_the_tag() {
    let a = scenario_tag(Variant::Argon2d);
    let b = hash_keyed(
        Variant::Argon2d,
        &PWD,
        &SALT,
        &SECRET,
        &AD,
        &scenario_params(2, ThreadMode::Sequential),
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn secret_and_ad_are_bound() {
    let params = scenario_params(4, ThreadMode::Sequential);
    let keyed = hash_keyed(Variant::Argon2d, &PWD, &SALT, &SECRET, &AD, &params).unwrap();
    let bare = hash(Variant::Argon2d, &PWD, &SALT, &params).unwrap();
    assert_ne!(keyed, bare);
}

#[test]
fn long_tags_use_the_chained_extension() {
    let mut params = scenario_params(1, ThreadMode::Sequential);
    params.tag_len = 100;
    let long = hash(Variant::Argon2i, &PWD, &SALT, &params).unwrap();
    assert_eq!(long.len(), 100);

    params.tag_len = 64;
    let medium = hash(Variant::Argon2i, &PWD, &SALT, &params).unwrap();
    assert_eq!(medium.len(), 64);

    // The requested length is absorbed by the extension, so one tag is
    // not a prefix of the other.
    assert_ne!(&long[..64], &medium[..]);
}

#[test]
fn simple_entry_pins_one_lane() {
    let simple = hash_simple(&PWD, &SALT, 3, 32, 32).unwrap();
    let explicit = hash(
        Variant::Argon2d,
        &PWD,
        &SALT,
        &Params {
            mem_cost: 32,
            time_cost: 3,
            lanes: 1,
            tag_len: 32,
            thread_mode: ThreadMode::Sequential,
            clear_memory: false,
        },
    )
    .unwrap();
    assert_eq!(simple, explicit);
}

#[test]
fn wiping_entry_clears_its_inputs() {
    let params = scenario_params(4, ThreadMode::Sequential);
    let expected = hash_keyed(Variant::Argon2id, &PWD, &SALT, &SECRET, &AD, &params).unwrap();

    let mut pwd = PWD;
    let mut secret = SECRET;
    let tag = hash_wiping(Variant::Argon2id, &mut pwd, &SALT, &mut secret, &AD, &params).unwrap();

    assert_eq!(tag, expected);
    assert_eq!(pwd, [0u8; 32]);
    assert_eq!(secret, [0u8; 8]);
}

#[test]
fn clear_memory_flag_does_not_change_the_tag() {
    let mut params = scenario_params(4, ThreadMode::Sequential);
    params.clear_memory = true;
    let a = hash_keyed(Variant::Argon2ds, &PWD, &SALT, &SECRET, &AD, &params).unwrap();
    let b = scenario_tag(Variant::Argon2ds);
    assert_eq!(a, b);
}

#[test]
fn empty_password_is_accepted() {
    let params = scenario_params(1, ThreadMode::Sequential);
    let tag = hash(Variant::Argon2i, b"", &SALT, &params).unwrap();
    assert_eq!(tag.len(), 32);
}
