use std::fs;
use std::path::PathBuf;

use rand::RngCore;
use randwalk::session::Session;
use randwalk::walk::RandomWalk;
use randwalk::{Viewport, WalkConfig};
use sha2::{Digest, Sha256};

/// SplitMix64: a fixed, portable stream so the golden does not depend on
/// which algorithm backs `StdRng` in a given rand release.
struct SplitMix64(u64);

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn fixture_config() -> WalkConfig {
    WalkConfig {
        viewport: Viewport { width: 256, height: 128 },
        step_length: 8,
        ..Default::default()
    }
}

/// PNG bytes of a 400-step walk over a 256x128 surface.
fn render_fixture() -> Vec<u8> {
    let walk = RandomWalk::with_rng(2, SplitMix64(0x5eed)).expect("walk");
    let mut session = Session::with_walk(&fixture_config(), walk);
    session.step_and_render(400).expect("render").png_data
}

#[test]
fn fixed_seed_render_is_reproducible() {
    assert_eq!(render_fixture(), render_fixture());

    let cfg = WalkConfig { seed: Some(0x5eed), ..fixture_config() };
    let mut a = Session::from_config(&cfg).unwrap();
    let mut b = Session::from_config(&cfg).unwrap();
    assert_eq!(
        a.step_and_render(400).unwrap().png_data,
        b.step_and_render(400).unwrap().png_data
    );
}

#[test]
fn golden_walk_matches_fixture() {
    // digest the decoded pixels, not the compressed stream
    let png = render_fixture();
    let pixels = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(pixels.dimensions(), (256, 128));
    let digest = hex::encode(Sha256::digest(pixels.as_raw()));

    let expected_path = golden_path("walk_splitmix_5eed.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
