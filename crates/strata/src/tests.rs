use strata_linalg::{vec2, vec3, vec4, Mat3, Mat4, Quat, Vec3};

use crate::codec::{F16, F32, F64, I16, I32, I64};

use super::*;

#[test]
fn relocated_vector() {
    let mut storage = [0; 100];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::with_address(50);
    let v = BufVec2::<F64>::new(buf, &base, 0);

    v.set2(1.5, -2.25).unwrap();
    assert_eq!(v.get2().unwrap(), (1.5, -2.25));
    assert_eq!(buf.read_f64(50).unwrap(), 1.5);
    assert_eq!(buf.read_f64(58).unwrap(), -2.25);

    base.set(90);
    assert_eq!(
        v.get2(),
        Err(Error::OutOfBounds {
            address: 90,
            size: 16,
            capacity: 100,
        })
    );
    // The first component alone would fit, but the view as a whole does not.
    assert!(matches!(v.x(), Err(Error::OutOfBounds { .. })));
    assert!(matches!(v.set_x(7.0), Err(Error::OutOfBounds { .. })));
    assert!(matches!(v.y(), Err(Error::OutOfBounds { .. })));
    assert_eq!(buf.to_vec()[90..], [0; 10]);
}

#[test]
fn half_scenario() {
    let mut storage = [0; 4];
    let buf = ByteBuffer::new(&mut storage, ByteOrder::Little);
    let base = SharedBase::new();
    let v = BufVec2::<F16>::new(buf, &base, 0);

    v.set_x(65504.0).unwrap();
    assert_eq!(v.x().unwrap(), 65504.0);
    v.set_y(100000.0).unwrap();
    assert_eq!(v.y().unwrap(), f64::INFINITY);
    v.set_y(-100000.0).unwrap();
    assert_eq!(v.y().unwrap(), f64::NEG_INFINITY);
    assert_eq!(buf.to_vec(), [0xFF, 0x7B, 0x00, 0xFC]);
}

#[test]
fn shared_base_propagation() {
    let mut storage = [0; 64];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::new();
    let a = BufVec2::<I32>::new(buf, &base, 0);
    let b = BufVec2::<I32>::new(buf, &base, 8);

    a.set2(1, 2).unwrap();
    b.set2(3, 4).unwrap();

    base.set(16);
    assert_eq!(a.address(), Ok(16));
    assert_eq!(b.address(), Ok(24));
    assert_eq!(a.get2().unwrap(), (0, 0));
    a.set2(5, 6).unwrap();
    b.set2(7, 8).unwrap();

    base.set(0);
    assert_eq!(a.get2().unwrap(), (1, 2));
    assert_eq!(b.get2().unwrap(), (3, 4));

    base.set(16);
    assert_eq!(a.get2().unwrap(), (5, 6));
    assert_eq!(b.get2().unwrap(), (7, 8));
}

#[test]
fn views_share_buffer() {
    let mut storage = [0; 16];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::new();
    let v = BufVec4::<I32>::new(buf, &base, 0);
    let q = BufferQuat::<I32>::new(buf, &base, 0);
    let m = BufMat2::<I32>::new(buf, &base, 0);

    v.set4(1, 2, 3, 4).unwrap();
    assert_eq!(q.load().unwrap(), Quat::from_components(1, 2, 3, 4));
    assert_eq!(m.column(1).unwrap(), vec2(3i32, 4));
    assert_eq!(m.row(0).unwrap(), vec2(1i32, 3));

    m.set(1, 1, 40).unwrap();
    assert_eq!(q.w().unwrap(), 40);
}

#[test]
fn bounds_on_every_accessor() {
    let mut storage = [0xEE; 8];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::with_address(100);
    let v = BufVec3::<I16>::new(buf, &base, 0);
    let m = BufMat2::<I16>::new(buf, &base, 0);
    let q = BufferQuat::<I16>::new(buf, &base, 0);

    fn oob<T: std::fmt::Debug>(res: Result<T>) {
        assert!(matches!(res, Err(Error::OutOfBounds { .. })), "{res:?}");
    }

    oob(v.get(0));
    oob(v.set(1, 0));
    oob(v.x());
    oob(v.set_z(0));
    oob(v.get3());
    oob(v.set3(1, 2, 3));
    oob(v.load());
    oob(v.store(&vec3(1, 2, 3)));
    oob(v.copy_from(&[1, 2]));
    oob(v.copy_to(&mut [0; 3]));

    oob(m.get(0, 0));
    oob(m.set(1, 1, 0));
    oob(m.element(3));
    oob(m.set_element(0, 0));
    oob(m.column(0));
    oob(m.row(1));
    oob(m.set_column(0, &vec2(0, 0)));
    oob(m.set_row(0, &vec2(0, 0)));
    oob(m.load());
    oob(m.store(&strata_linalg::Mat2::ZERO));

    oob(q.get(3));
    oob(q.set_x(1));
    oob(q.w());
    oob(q.load());
    oob(q.store(&Quat::IDENTITY));

    // A negative effective address is out of bounds as well.
    base.set(-2);
    oob(v.x());
    oob(m.get(0, 0));

    assert_eq!(buf.to_vec(), [0xEE; 8]);
}

#[test]
fn bounds_on_partially_fitting_views() {
    let mut storage = [0x5A; 100];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::with_address(90);
    // Each view starts inside the buffer and ends past it.
    let v = BufVec2::<F64>::new(buf, &base, 0);
    let m = BufMat2::<I32>::new(buf, &base, 0);
    let q = BufferQuat::<F32>::new(buf, &base, 0);

    fn oob<T: std::fmt::Debug>(res: Result<T>) {
        assert!(matches!(res, Err(Error::OutOfBounds { .. })), "{res:?}");
    }

    oob(v.get(0));
    oob(v.set(0, 1.0));
    oob(v.x());
    oob(v.set_x(1.0));
    oob(v.copy_from(&[1.0f64]));
    oob(v.copy_from(&[0.0f64; 0]));
    oob(v.copy_to(&mut [0.0f64; 1]));
    oob(v.copy_to(&mut [0.0f64; 0]));

    oob(m.get(0, 0));
    oob(m.set(1, 0, 1));
    oob(m.element(1));
    oob(m.set_element(0, 1));
    oob(m.row(0));
    oob(m.set_column(0, &vec2(1, 2)));
    oob(m.copy_from(&strata_linalg::Matrix::<i32, 1, 1>::from_fn(|_, _| 1)));
    oob(m.copy_from(&strata_linalg::Matrix::<i32, 0, 0>::default()));
    oob(m.copy_to(&mut strata_linalg::Matrix::<i32, 1, 1>::default()));

    oob(q.get(0));
    oob(q.set(1, 1.0));
    oob(q.x());
    oob(q.set_y(1.0));
    oob(q.copy_from(&[1.0f32, 2.0]));
    oob(q.copy_to(&mut [0.0f32; 2]));

    assert_eq!(buf.to_vec(), [0x5A; 100]);
}

#[test]
fn address_overflow() {
    let mut storage = [0; 8];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::with_address(i64::MAX);
    let v = BufVec2::<I64>::new(buf, &base, 1);

    assert!(matches!(v.address(), Err(Error::AddressOverflow { .. })));
    assert!(matches!(v.get(0), Err(Error::AddressOverflow { .. })));
    assert!(matches!(v.set2(1, 2), Err(Error::AddressOverflow { .. })));

    base.set(i64::from(i32::MAX));
    assert!(matches!(v.x(), Err(Error::AddressOverflow { .. })));
}

#[test]
fn lower_dimensional_copy() {
    let mut storage = [0; 16];
    let buf = ByteBuffer::native(&mut storage);
    let base = SharedBase::new();
    let v = BufVec4::<F32>::new(buf, &base, 0);

    v.set4(5.0, 6.0, 7.0, 8.0).unwrap();
    v.copy_from(&vec2(1.0, 2.0)).unwrap();
    assert_eq!(v.get4().unwrap(), (1.0, 2.0, 7.0, 8.0));
}

#[test]
fn matches_heap_layout() {
    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Instance {
        position: Vec3<f32>,
        scale: f32,
        model: Mat4<f32>,
    }
    unsafe impl bytemuck::Zeroable for Instance {}
    unsafe impl bytemuck::Pod for Instance {}

    let model = Mat4::from_fn(|row, col| (row * 4 + col) as f32);
    let heap = [Instance {
        position: vec3(1.0, 2.0, 3.0),
        scale: 0.5,
        model,
    }];

    let mut storage = [0; 80];
    {
        let buf = ByteBuffer::native(&mut storage);
        let base = SharedBase::new();
        BufVec4::<F32>::new(buf, &base, 0)
            .store(&vec4(1.0, 2.0, 3.0, 0.5))
            .unwrap();
        BufMat4::<F32>::new(buf, &base, 16).store(&model).unwrap();
    }
    assert_eq!(&storage[..], bytemuck::cast_slice::<Instance, u8>(&heap));
}

#[test]
fn cursor_walk() {
    const STRIDE: i64 = 3 * 4 + 3 * 3 * 4;
    const COUNT: usize = 4;

    let mut storage = vec![0u8; STRIDE as usize * COUNT];
    let buf = ByteBuffer::new(&mut storage, ByteOrder::Big);
    let cursor = SharedBase::new();
    let position = BufVec3::<F32>::new(buf, &cursor, 0);
    let rotation = BufMat3::<F32>::new(buf, &cursor, 12);

    for i in 0..COUNT {
        let f = i as f32;
        position.set3(f, f * 2.0, f * 3.0).unwrap();
        rotation.store(&Mat3::IDENTITY).unwrap();
        rotation.set(0, 2, f).unwrap();
        cursor.advance(STRIDE).unwrap();
    }
    // One past the last instance.
    assert!(matches!(position.x(), Err(Error::OutOfBounds { .. })));

    cursor.set(2 * STRIDE);
    assert_eq!(position.get3().unwrap(), (2.0, 4.0, 6.0));
    assert_eq!(rotation.get(0, 2).unwrap(), 2.0);
    assert_eq!(rotation.get(1, 1).unwrap(), 1.0);
    assert_eq!(buf.read_f32(2 * STRIDE as usize + 4).unwrap(), 4.0);
}

#[test]
fn randomized_vectors() {
    let mut storage = [0; 256];
    let buf = ByteBuffer::new(&mut storage, ByteOrder::Big);
    let base = SharedBase::new();
    let v = BufVec3::<I64>::new(buf, &base, 0);

    for _ in 0..200 {
        base.set(fastrand::i64(0..=(256 - 24)));
        let value = Vec3::from_fn(|_| fastrand::i64(..));
        v.store(&value).unwrap();
        assert_eq!(v.load().unwrap(), value);
        assert_eq!(v, value);
    }
}
