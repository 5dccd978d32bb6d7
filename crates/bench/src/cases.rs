// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Benchmark cases and their deterministic inputs.

use fixmatrix_kernel::config::ARITH;
use fixmatrix_kernel::digest::StateDigest;
use fixmatrix_kernel::fxp::{fxp_sqrt, narrow, wide};
use fixmatrix_kernel::matrix::{
    mf16_cholesky, mf16_mul, mf16_mul_bt, mf16_qr_decomposition, mf16_solve,
};
use fixmatrix_kernel::quat::{qf16_from_axis_angle, qf16_normalize, qf16_rotate};
use fixmatrix_kernel::vector::v3d_normalize;
use fixmatrix_kernel::{Fix16, Mf16, Operand, Qf16, V3d};

/// Order of the generated square matrices.
pub const MATRIX_ORDER: usize = 4;

/// Linear congruential generator; only needs to be reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    /// Raw value in `[-limit, limit)`.
    fn fix16(&mut self, limit: i32) -> Fix16 {
        let span = (limit as u32) * 2;
        Fix16((self.next_u32() % span) as i32 - limit)
    }
}

pub struct Inputs {
    pub scalars: Vec<(Fix16, Fix16)>,
    pub matrices: Vec<Mf16>,
    /// Symmetric positive definite versions of `matrices`.
    pub spd: Vec<Mf16>,
    pub rhs: Mf16,
    pub rotations: Vec<(Qf16, V3d)>,
}

impl Inputs {
    pub fn generate(count: usize, seed: u64) -> anyhow::Result<Self> {
        let mut rng = Lcg(seed);
        let count = count.max(1);

        let scalars = (0..count)
            .map(|_| (rng.fix16(100 << 16), rng.fix16(100 << 16)))
            .collect();

        let mut matrices = Vec::with_capacity(count);
        let mut spd = Vec::with_capacity(count);
        for _ in 0..count {
            let mut m = Mf16::new(MATRIX_ORDER, MATRIX_ORDER)?;
            for row in 0..MATRIX_ORDER {
                for column in 0..MATRIX_ORDER {
                    m.data[row][column] = rng.fix16(10 << 16);
                }
            }

            // m * m^T + n * I is positive definite.
            let mut s = Mf16::default();
            mf16_mul_bt(&mut s, &m, &m);
            for i in 0..MATRIX_ORDER {
                s.data[i][i] = s.data[i][i] + Fix16::from_int(MATRIX_ORDER as i32);
            }

            matrices.push(m);
            spd.push(s);
        }

        let mut rhs = Mf16::new(MATRIX_ORDER, 1)?;
        for row in 0..MATRIX_ORDER {
            rhs.data[row][0] = rng.fix16(10 << 16);
        }

        let rotations = (0..count)
            .map(|_| {
                let mut axis = V3d::new(rng.fix16(1 << 16), rng.fix16(1 << 16), Fix16::ONE);
                v3d_normalize(&mut axis, Operand::Dest);
                let mut q = Qf16::default();
                qf16_from_axis_angle(&mut q, &axis, rng.fix16(3 << 16));
                qf16_normalize(&mut q, Operand::Dest);
                let v = V3d::new(rng.fix16(50 << 16), rng.fix16(50 << 16), rng.fix16(50 << 16));
                (q, v)
            })
            .collect();

        Ok(Inputs { scalars, matrices, spd, rhs, rotations })
    }
}

/// What a case produced, for the determinism digest.
pub enum Output {
    Scalars(Vec<Fix16>),
    /// Float baselines are timed but not hashed.
    Floats(Vec<f32>),
    Matrices(Vec<Mf16>),
    Vectors(Vec<V3d>),
}

impl Output {
    pub fn feed(&self, digest: &mut StateDigest) {
        match self {
            Output::Scalars(values) => {
                digest.update(values.as_slice());
            }
            Output::Floats(_) => {}
            Output::Matrices(values) => {
                digest.update(values.as_slice());
            }
            Output::Vectors(values) => {
                digest.update(values.as_slice());
            }
        }
    }
}

pub struct Case {
    pub name: &'static str,
    pub run: fn(&Inputs) -> Output,
}

fn scalar_case(inputs: &Inputs, op: impl Fn(Fix16, Fix16) -> Fix16) -> Output {
    Output::Scalars(inputs.scalars.iter().map(|&(a, b)| op(a, b)).collect())
}

fn float_case(inputs: &Inputs, op: impl Fn(f32, f32) -> f32) -> Output {
    Output::Floats(
        inputs
            .scalars
            .iter()
            .map(|&(a, b)| op(a.to_f32(), b.to_f32()))
            .collect(),
    )
}

fn qr_of(m: &Mf16) -> (Mf16, Mf16) {
    let mut q = Mf16::default();
    let mut r = Mf16::default();
    mf16_qr_decomposition(&mut q, &mut r, m, 1);
    (q, r)
}

pub const CASES: &[Case] = &[
    Case {
        name: "fix16_mul_wide",
        run: |inputs| scalar_case(inputs, |a, b| wide::mul(a, b, ARITH)),
    },
    Case {
        name: "fix16_mul_narrow",
        run: |inputs| scalar_case(inputs, |a, b| narrow::mul(a, b, ARITH)),
    },
    Case {
        name: "fix16_div_wide",
        run: |inputs| scalar_case(inputs, |a, b| wide::div(a, b, ARITH)),
    },
    Case {
        name: "fix16_div_narrow",
        run: |inputs| scalar_case(inputs, |a, b| narrow::div(a, b, ARITH)),
    },
    Case {
        name: "fix16_sqrt",
        run: |inputs| scalar_case(inputs, |a, _| fxp_sqrt(a.abs())),
    },
    Case {
        name: "float_mul",
        run: |inputs| float_case(inputs, |a, b| a * b),
    },
    Case {
        name: "float_div",
        run: |inputs| float_case(inputs, |a, b| a / b),
    },
    Case {
        name: "mf16_mul",
        run: |inputs| {
            Output::Matrices(
                inputs
                    .matrices
                    .windows(2)
                    .map(|pair| {
                        let mut dest = Mf16::default();
                        mf16_mul(&mut dest, &pair[0], &pair[1]);
                        dest
                    })
                    .collect(),
            )
        },
    },
    Case {
        name: "mf16_qr_decomposition",
        run: |inputs| {
            Output::Matrices(
                inputs
                    .matrices
                    .iter()
                    .flat_map(|m| {
                        let (q, r) = qr_of(m);
                        [q, r]
                    })
                    .collect(),
            )
        },
    },
    Case {
        name: "mf16_solve",
        run: |inputs| {
            Output::Matrices(
                inputs
                    .matrices
                    .iter()
                    .map(|m| {
                        let (q, r) = qr_of(m);
                        let mut x = Mf16::default();
                        mf16_solve(&mut x, &q, &r, &inputs.rhs);
                        x
                    })
                    .collect(),
            )
        },
    },
    Case {
        name: "mf16_cholesky",
        run: |inputs| {
            Output::Matrices(
                inputs
                    .spd
                    .iter()
                    .map(|m| {
                        let mut l = Mf16::default();
                        mf16_cholesky(&mut l, m);
                        l
                    })
                    .collect(),
            )
        },
    },
    Case {
        name: "qf16_rotate",
        run: |inputs| {
            Output::Vectors(
                inputs
                    .rotations
                    .iter()
                    .map(|(q, v)| {
                        let mut out = V3d::default();
                        qf16_rotate(&mut out, v, q);
                        out
                    })
                    .collect(),
            )
        },
    },
];
