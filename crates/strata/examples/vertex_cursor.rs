//! Fills an instance buffer by walking a single shared base over it.
//!
//! Each instance is laid out as a `vec3<f32>` position, a binary16 normal (padded to 8 bytes) and a
//! column-major `mat4x4<f32>` model matrix.

use anyhow::Context;
use log::LevelFilter;
use strata::{
    codec::{F16, F32},
    BufMat4, BufVec3, ByteBuffer, SharedBase,
};
use strata_linalg::{vec3, vec4, Mat4};

const POSITION: i32 = 0;
const NORMAL: i32 = 12;
const MODEL: i32 = 20;
const STRIDE: usize = 20 + 16 * 4;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("strata"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("usage: vertex_cursor [<instance-count>], got '{arg}'"))?,
        None => 8,
    };

    let mut storage = vec![0u8; count * STRIDE];
    let buf = ByteBuffer::native(&mut storage);
    let cursor = SharedBase::new();
    let position = BufVec3::<F32>::new(buf, &cursor, POSITION);
    let normal = BufVec3::<F16>::new(buf, &cursor, NORMAL);
    let model = BufMat4::<F32>::new(buf, &cursor, MODEL);

    for i in 0..count {
        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        let pos = vec3(cos * 10.0, 0.0, sin * 10.0);

        position.store(&pos)?;
        normal.set3(f64::from(cos), 0.0, f64::from(sin))?;
        model.store(&Mat4::IDENTITY)?;
        model.set_column(3, &vec4(pos[0], pos[1], pos[2], 1.0))?;

        cursor.advance(STRIDE as i64)?;
    }

    log::debug!("wrote {count} instances ({} bytes)", buf.capacity());

    // Read everything back through the same views.
    cursor.set(0);
    for i in 0..count {
        log::info!(
            "instance {i} @ {}: position={:?} normal={:?} translation={:?}",
            position.address()?,
            position.load()?,
            normal.load()?,
            model.column(3)?,
        );
        cursor.advance(STRIDE as i64)?;
    }

    Ok(())
}
