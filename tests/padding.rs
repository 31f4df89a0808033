use ledgerhash::hash::Sha256Error;
use ledgerhash::hash::sha256::padding::{BLOCK_LEN, message_bit_len, message_blocks};

fn expected_block_count(len: usize) -> usize {
    // One marker bit and a 64-bit length field follow the message.
    (8 * len + 65).div_ceil(512)
}

fn collect_blocks(msg: &[u8]) -> Vec<[u8; BLOCK_LEN]> {
    message_blocks(msg)
        .expect("input fits the length field")
        .collect()
}

// -------------------------------------------------------
// 1. BLOCK COUNT
// -------------------------------------------------------

#[test]
fn block_count_matches_padding_formula() {
    let msg = vec![0xA7u8; 200];

    for len in 0..=200usize {
        let blocks = message_blocks(&msg[..len]).expect("input fits the length field");

        assert_eq!(
            blocks.len(),
            expected_block_count(len),
            "block count mismatch at length {}",
            len,
        );
    }
}

#[test]
fn padded_length_is_a_multiple_of_512_bits() {
    let msg = vec![0x3Cu8; 200];

    for len in 0..=200usize {
        let blocks = collect_blocks(&msg[..len]);
        let padded_bits = blocks.len() * BLOCK_LEN * 8;

        assert_eq!(padded_bits % 512, 0);
        assert!(padded_bits >= 8 * len + 65);
    }
}

// -------------------------------------------------------
// 2. BLOCK LAYOUT
// -------------------------------------------------------

#[test]
fn empty_message_pads_to_one_block() {
    let blocks = collect_blocks(b"");

    assert_eq!(blocks.len(), 1);

    let block = blocks[0];
    assert_eq!(block[0], 0x80);
    assert!(block[1..].iter().all(|&b| b == 0));
}

#[test]
fn fifty_five_bytes_fit_a_single_block() {
    let msg = vec![0x61u8; 55];
    let blocks = collect_blocks(&msg);

    assert_eq!(blocks.len(), 1);

    let block = blocks[0];
    assert_eq!(&block[..55], msg.as_slice());
    assert_eq!(block[55], 0x80);
    assert_eq!(&block[56..], 440u64.to_be_bytes());
}

#[test]
fn fifty_six_bytes_spill_into_a_second_block() {
    let msg = vec![0x62u8; 56];
    let blocks = collect_blocks(&msg);

    assert_eq!(blocks.len(), 2);

    let first = blocks[0];
    assert_eq!(&first[..56], msg.as_slice());
    assert_eq!(first[56], 0x80);
    assert!(first[57..].iter().all(|&b| b == 0));

    let second = blocks[1];
    assert!(second[..56].iter().all(|&b| b == 0));
    assert_eq!(&second[56..], 448u64.to_be_bytes());
}

#[test]
fn exact_block_message_appends_a_padding_block() {
    let msg = vec![0x63u8; 64];
    let blocks = collect_blocks(&msg);

    assert_eq!(blocks.len(), 2);
    assert_eq!(&blocks[0][..], msg.as_slice());

    let tail = blocks[1];
    assert_eq!(tail[0], 0x80);
    assert!(tail[1..56].iter().all(|&b| b == 0));
    assert_eq!(&tail[56..], 512u64.to_be_bytes());
}

#[test]
fn blocks_carry_the_message_bytes_in_order() {
    let msg: Vec<u8> = (0..150u8).collect();
    let blocks = collect_blocks(&msg);

    let padded: Vec<u8> = blocks.concat();
    assert_eq!(&padded[..msg.len()], msg.as_slice());
    assert_eq!(padded[msg.len()], 0x80);
}

// -------------------------------------------------------
// 3. LENGTH FIELD LIMIT
// -------------------------------------------------------

#[test]
fn bit_length_rejects_messages_beyond_the_length_field() {
    assert_eq!(message_bit_len(0), Ok(0));
    assert_eq!(message_bit_len(55), Ok(440));

    // The limit itself only fits in a usize on 64-bit targets.
    if usize::BITS >= 64 {
        let max_len = (u64::MAX / 8) as usize;

        assert_eq!(message_bit_len(max_len), Ok(u64::MAX - 7));
        assert_eq!(
            message_bit_len(max_len + 1),
            Err(Sha256Error::MessageTooLong(max_len + 1)),
        );
    }
}
