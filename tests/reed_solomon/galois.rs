//! Galois field arithmetic tests across every predefined field

use rscodec::galois::{
    aztec_data_10, aztec_data_12, aztec_data_6, aztec_param, data_matrix_field_256, gf8,
    qr_code_field_256,
};
use rscodec::{GaloisField, RsError};

fn all_fields() -> [&'static GaloisField; 7] {
    [
        gf8(),
        aztec_param(),
        aztec_data_6(),
        qr_code_field_256(),
        data_matrix_field_256(),
        aztec_data_10(),
        aztec_data_12(),
    ]
}

#[test]
fn exp_log_round_trip_over_every_element() {
    for field in all_fields() {
        for a in 1..field.size() as u16 {
            let log = field.log(a).unwrap();
            assert_eq!(field.exp(log as usize), a, "a = {} in {}", a, field);
        }
    }
}

#[test]
fn multiply_by_inverse_is_one_over_every_element() {
    for field in all_fields() {
        for a in 1..field.size() as u16 {
            let inverse = field.inverse(a).unwrap();
            assert_eq!(field.multiply(a, inverse), 1, "a = {} in {}", a, field);
        }
    }
}

#[test]
fn addition_is_self_inverse() {
    for field in all_fields() {
        let limit = field.size() as u16;
        for (a, b) in [(1, limit - 1), (limit / 2, limit / 3), (7 % limit, 5 % limit)] {
            assert_eq!(field.add(a, field.add(a, b)), b);
            assert_eq!(field.sub(a, b), field.add(a, b));
        }
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    for field in all_fields() {
        let limit = field.size() as u16;
        let samples = [1u16, 2, 3, limit - 1, limit / 2 + 1];
        for &a in &samples {
            for &b in &samples {
                for &c in &samples {
                    let left = field.multiply(a, field.add(b, c));
                    let right = field.add(field.multiply(a, b), field.multiply(a, c));
                    assert_eq!(left, right, "a={} b={} c={} in {}", a, b, c, field);
                }
            }
        }
    }
}

#[test]
fn zero_is_rejected_by_log_and_inverse() {
    for field in all_fields() {
        assert_eq!(field.log(0), Err(RsError::LogOfZero));
        assert_eq!(field.inverse(0), Err(RsError::InverseOfZero));
    }
}

#[test]
fn generator_powers_cover_the_whole_multiplicative_group() {
    for field in all_fields() {
        let mut seen = vec![false; field.size()];
        for i in 0..field.size() - 1 {
            let value = field.exp(i) as usize;
            assert!(!seen[value], "exp({}) repeats in {}", i, field);
            seen[value] = true;
        }
        assert!(!seen[0], "zero is not a generator power");
    }
}
