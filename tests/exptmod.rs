//! Modular exponentiation scenarios checked against `num-bigint`.

mod common;

use bigint_exptmod::{
    Config, Error, Exptmod, FastPath, Kernel, Limb, ModulusKind, Natural, NaturalKernel, NonZero,
    Strategy, Word, exptmod,
    modular::{BarrettReducer, TableSlots, WindowSize, pow_barrett},
};
use common::{naive_exptmod, to_biguint, to_natural};
use hex_literal::hex;
use num_bigint::BigUint;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Exponent bit lengths on both sides of every window size change.
const THRESHOLDS: [u32; 12] = [7, 8, 36, 37, 140, 141, 450, 451, 1303, 1304, 3529, 3530];

fn check(g: &Natural, x: &Natural, p: &Natural) {
    let expected = to_biguint(g).modpow(&to_biguint(x), &to_biguint(p));
    let actual = exptmod(g, x, p).unwrap();
    assert_eq!(to_biguint(&actual), expected, "g = {g:?}, x = {x:?}, p = {p:?}");
}

#[test]
fn concrete_values() {
    let n = |v: u64| Natural::from(v);
    assert_eq!(exptmod(&n(4), &n(13), &n(497)), Ok(n(445)));
    assert_eq!(exptmod(&n(2), &n(10), &n(1000)), Ok(n(24)));
    assert_eq!(exptmod(&n(5), &n(0), &n(7)), Ok(n(1)));
    assert_eq!(exptmod(&n(0), &n(5), &n(11)), Ok(n(0)));
}

#[test]
fn identities() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for bits in [1, 63, 64, 65, 200, 1024] {
        let p = Natural::random_bits_exact(&mut rng, bits);
        let g = Natural::random_bits(&mut rng, bits + 17);

        // X = 0 gives 1 mod P
        let one = if p.is_one() { Natural::zero() } else { Natural::one() };
        assert_eq!(exptmod(&g, &Natural::zero(), &p), Ok(one));

        // G ≡ 0 (mod P) with X > 0 gives 0
        let multiple = &p * &Natural::from(12345u16);
        assert_eq!(exptmod(&multiple, &Natural::from(3u8), &p), Ok(Natural::zero()));

        // X = 1 gives G mod P
        let nz = NonZero::<Natural>::new(p.clone()).unwrap();
        assert_eq!(exptmod(&g, &Natural::one(), &p), Ok(g.rem_vartime(&nz)));
    }
}

#[test]
fn modulus_of_one() {
    for x in [0u8, 1, 2, 200] {
        assert_eq!(
            exptmod(&Natural::from(9u8), &Natural::from(x), &Natural::one()),
            Ok(Natural::zero())
        );
    }
}

#[test]
fn zero_modulus() {
    assert_eq!(
        exptmod(&Natural::from(2u8), &Natural::from(3u8), &Natural::zero()),
        Err(Error::InvalidModulus)
    );
}

#[test]
fn window_thresholds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let p = Natural::random_bits_exact(&mut rng, 256);
    let even = &p + &Natural::from(p.is_odd() as u8);

    for bits in THRESHOLDS {
        let x = Natural::random_bits_exact(&mut rng, bits);
        assert_eq!(x.bits(), bits);
        let g = Natural::random_bits(&mut rng, 300);
        check(&g, &x, &p);
        check(&g, &x, &even);
    }
}

#[test]
fn all_ones_exponents() {
    // every window is full, every flush multiplies
    let p = Natural::from_be_hex("f1e2d3c4b5a697887766554433221100ffeeddccbbaa9988").unwrap();
    let g = Natural::from(3u8);
    for bits in [1, 2, 3, 7, 8, 35, 36, 37, 141] {
        let x = &Natural::power_of_two(bits) - &Natural::one();
        check(&g, &x, &p);
    }
}

#[test]
fn trailing_partial_windows() {
    let p = Natural::from_words([0x1234_5679, 0x7fff_0000, 0x55]);
    let g = Natural::from_words([0xdead_beef, 0xcafe]);

    for window in 2..=8 {
        // An exponent of bit length in the window's range whose last window is cut short by
        // `tail` bits.
        let bits = match window {
            2 => 7,
            3 => 36,
            4 => 140,
            5 => 450,
            6 => 1303,
            7 => 3529,
            _ => 3600,
        };
        assert_eq!(WindowSize::for_exponent_bits(bits).get(), window);

        for tail in 1..window {
            // single set top bit followed by zeros, then `tail` set bits
            let x = &Natural::power_of_two(bits - 1)
                + &(&Natural::power_of_two(tail) - &Natural::one());
            assert_eq!(x.bits(), bits);
            check(&g, &x, &p);
        }
    }
}

#[test]
fn multi_limb_against_naive_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..8 {
        let p = Natural::random_bits_exact(&mut rng, 521);
        let g = Natural::random_bits(&mut rng, 521);
        let x = Natural::random_bits(&mut rng, 160);

        let expected = naive_exptmod(&to_biguint(&g), &to_biguint(&x), &to_biguint(&p));
        assert_eq!(to_natural(&expected), g.pow_mod(&x, &p).unwrap());
    }
}

#[test]
fn modp_group() {
    // RFC 3526 1536-bit MODP group, g = 2
    let p = Natural::from_be_slice(&hex!(
        "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1"
        "29024E088A67CC74020BBEA63B139B22514A08798E3404DD"
        "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245"
        "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED"
        "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D"
        "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F"
        "83655D23DCA3AD961C62F356208552BB9ED529077096966D"
        "670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF"
    ));
    let g = Natural::from(2u8);

    check(&g, &(&p - &Natural::one()), &p);

    // The modulus has diminished radix shape only in its top limbs.
    assert_eq!(NaturalKernel.modulus_kind(&p), ModulusKind::Generic);

    let x = Natural::from_be_hex("0123456789abcdef0123456789abcdef").unwrap();
    check(&g, &x, &p);
}

#[test]
fn diminished_radix_modulus() {
    // 2^(4·BITS) - 189
    let words = [Word::MAX - 188, Word::MAX, Word::MAX, Word::MAX];
    let p = Natural::from_words(words);
    assert_eq!(NaturalKernel.modulus_kind(&p), ModulusKind::DiminishedRadix);

    let engine = Exptmod::new(NaturalKernel);
    assert_eq!(
        engine.strategy(&p),
        Strategy::FastPath(ModulusKind::DiminishedRadix)
    );

    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let g = Natural::random_bits(&mut rng, 4 * Limb::BITS);
    let x = Natural::random_bits(&mut rng, 4 * Limb::BITS);
    let expected = to_biguint(&g).modpow(&to_biguint(&x), &to_biguint(&p));
    assert_eq!(to_biguint(&engine.exptmod(&g, &x, &p).unwrap()), expected);
}

#[test]
fn power_table_integrity() {
    let kernel = NaturalKernel;
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let p = Natural::random_bits_exact(&mut rng, 384);
    let g = Natural::random_bits(&mut rng, 512);
    let (g_big, p_big) = (to_biguint(&g), to_biguint(&p));

    for bits in THRESHOLDS {
        let window = WindowSize::for_exponent_bits(bits);
        let reducer = BarrettReducer::new(&kernel, &p).unwrap();
        let table = TableSlots::allocate(&kernel, window)
            .unwrap()
            .populate(&reducer, &g)
            .unwrap();

        assert_eq!(to_biguint(table.base()), &g_big % &p_big);
        let top = window.table_len() - 1;
        assert_eq!(
            to_biguint(table.get(top).unwrap()),
            g_big.modpow(&BigUint::from(top), &p_big)
        );
        for index in table.indices() {
            assert_eq!(
                to_biguint(table.get(index).unwrap()),
                g_big.modpow(&BigUint::from(index), &p_big),
                "M[{index}], w = {}",
                window.get()
            );
        }
    }
}

#[test]
fn generic_engine_matches_dispatcher() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let p = Natural::random_bits_exact(&mut rng, 200);
    let g = Natural::random_bits(&mut rng, 200);
    let x = Natural::random_bits(&mut rng, 200);
    assert_eq!(
        pow_barrett(&NaturalKernel, &g, &x, &p),
        Exptmod::new(NaturalKernel).exptmod(&g, &x, &p)
    );
}

/// Fast path which answers with `G·X mod P`, so delegation is observable.
#[derive(Clone, Debug)]
struct Product;

impl FastPath<NaturalKernel> for Product {
    fn exptmod(
        &self,
        kernel: &NaturalKernel,
        base: &Natural,
        exponent: &Natural,
        modulus: &Natural,
        _: ModulusKind,
    ) -> bigint_exptmod::Result<Natural> {
        kernel.modulo(&kernel.multiply(base, exponent)?, modulus)
    }
}

#[test]
fn dispatch() {
    let engine = Exptmod::new(NaturalKernel)
        .with_fast_path(Product)
        .with_config(Config::new().with_fast_path_min_limbs(1));

    let odd = Natural::from_words([0x1001, 0x2]);
    let even = Natural::from_words([0x1000, 0x2]);
    let small = Natural::from(1001u16);
    let (g, x) = (Natural::from(3u8), Natural::from(5u8));

    assert_eq!(engine.strategy(&odd), Strategy::FastPath(ModulusKind::Generic));
    assert_eq!(engine.exptmod(&g, &x, &odd), Ok(Natural::from(15u8)));

    assert_eq!(engine.strategy(&even), Strategy::Barrett);
    assert_eq!(engine.exptmod(&g, &x, &even), Ok(Natural::from(243u8)));

    assert_eq!(engine.strategy(&small), Strategy::Barrett);
    assert_eq!(engine.exptmod(&g, &x, &small), Ok(Natural::from(243u8)));

    let above_cutoff = engine
        .clone()
        .with_config(Config::new().with_fast_path_min_limbs(1).with_montgomery_cutoff(2));
    assert_eq!(above_cutoff.strategy(&odd), Strategy::Barrett);
    assert_eq!(above_cutoff.exptmod(&g, &x, &odd), Ok(Natural::from(243u8)));
}
