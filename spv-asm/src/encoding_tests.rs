//! Wire-level decode/encode cases for individual instructions.

use alloc::vec;
use alloc::vec::Vec;

use crate::operand::OptionalId;
use crate::{
    ops, CheckError, DecodeError, ExecutionScope, Instruction, OperandKind, SamplerFilterMode,
    SourceLanguage, Word,
};

// Decodes, verifies, and re-encodes; the round trip must reproduce the
// input words exactly.
fn roundtrip(words: &[Word]) -> Instruction {
    let instruction = Instruction::decode(words).unwrap();
    instruction.verify().unwrap();

    assert_eq!(instruction.encoded_len() as usize, words.len());

    let mut out = Vec::new();
    instruction.encode_into(&mut out);
    assert_eq!(out, words);

    instruction
}

#[test]
fn source_record() {
    let instruction = roundtrip(&[0x0003_0001, 2, 450]);

    assert_eq!(
        instruction,
        Instruction::Source(ops::Source {
            source_language: SourceLanguage::Glsl,
            version: 450,
        })
    );
}

#[test]
fn source_extension_record() {
    let instruction = roundtrip(&[
        0x0007_0002,
        0x7473_6574,
        0x756f_7320,
        0x2065_6372,
        0x6574_7865,
        0x6f69_736e,
        0x0000_006e,
    ]);

    assert_eq!(
        instruction,
        Instruction::SourceExtension(ops::SourceExtension {
            extension: "test source extension".into(),
        })
    );
}

#[test]
fn faulty_instruction_words() {
    assert_eq!(Instruction::decode(&[]), Err(DecodeError::InvalidWordCount));
    assert_eq!(
        Instruction::decode(&[0x0000_0001]),
        Err(DecodeError::InvalidWordCount)
    );
    assert_eq!(
        Instruction::decode(&[0x0001_0001]),
        Err(DecodeError::MissingOperands)
    );
    assert_eq!(
        Instruction::decode(&[0x0001_0000]),
        Err(DecodeError::Unacceptable)
    );
    assert_eq!(
        Instruction::decode(&[0x0001_ffff]),
        Err(DecodeError::UnknownOpcode(0xffff))
    );
}

#[test]
fn word_count_must_cover_the_operands() {
    // A two-word count over a three-word slice leaves a stray word.
    assert_eq!(
        Instruction::decode(&[0x0003_0008, 1, 99]),
        Err(DecodeError::InvalidWordCount)
    );
    // A count larger than the slice is equally wrong.
    assert_eq!(
        Instruction::decode(&[0x0004_0008, 1]),
        Err(DecodeError::InvalidWordCount)
    );
}

#[test]
fn enumerated_operands_validate_during_decode() {
    assert_eq!(
        Instruction::decode(&[0x0003_0001, 9, 450]),
        Err(DecodeError::InvalidOperand(OperandKind::SourceLanguage))
    );
}

#[test]
fn linkage_decoration_argument_is_range_checked() {
    let instruction = Instruction::decode(&[0x0004_0032, 1, 43, 99]).unwrap();
    assert_eq!(
        instruction.verify(),
        Err(CheckError::InvalidOperand(OperandKind::LinkageType))
    );

    // Export linkage is within range.
    roundtrip(&[0x0004_0032, 1, 43, 0]);
}

#[test]
fn decoration_operand_counts() {
    // Location takes exactly one operand.
    let missing = Instruction::decode(&[0x0003_0032, 1, 30]).unwrap();
    assert!(missing.verify().is_err());

    // Flat takes none.
    let stray = Instruction::decode(&[0x0004_0032, 1, 13, 7]).unwrap();
    assert!(stray.verify().is_err());

    roundtrip(&[0x0004_0032, 1, 30, 2]);
    roundtrip(&[0x0003_0032, 1, 13]);
}

#[test]
fn execution_mode_operand_counts() {
    // LocalSize takes three operands.
    roundtrip(&[0x0006_0007, 1, 16, 8, 8, 1]);

    let short = Instruction::decode(&[0x0004_0007, 1, 16, 8]).unwrap();
    assert!(short.verify().is_err());

    // ContractionOff takes none.
    let stray = Instruction::decode(&[0x0004_0007, 1, 30, 1]).unwrap();
    assert!(stray.verify().is_err());
}

#[test]
fn optional_trailing_id_shortens_the_encoding() {
    // Variable with and without an initializer.
    let with = roundtrip(&[0x0005_0026, 1, 2, 6, 3]);
    assert_eq!(
        with,
        Instruction::Variable(ops::Variable {
            result_type: 1,
            result_id: 2,
            storage_class: crate::StorageClass::PrivateGlobal,
            initializer: OptionalId(3),
        })
    );

    let without = roundtrip(&[0x0004_0026, 1, 2, 6]);
    assert_eq!(
        without,
        Instruction::Variable(ops::Variable {
            result_type: 1,
            result_id: 2,
            storage_class: crate::StorageClass::PrivateGlobal,
            initializer: OptionalId::NONE,
        })
    );
}

#[test]
fn sampler_type_flags_and_optional_qualifier() {
    roundtrip(&[0x0008_000e, 1, 2, 1, 2, 0, 0, 1]);
    roundtrip(&[0x0009_000e, 1, 2, 1, 2, 0, 0, 1, 4]);

    let bad_content = Instruction::decode(&[0x0008_000e, 1, 2, 1, 3, 0, 0, 1]).unwrap();
    assert_eq!(
        bad_content.verify(),
        Err(CheckError::SamplerTypeFlag { field: "content", value: 3, max: 2 })
    );
}

#[test]
fn constant_sampler_param_flag() {
    roundtrip(&[0x0006_001f, 1, 2, 2, 1, 16]);

    let instruction = Instruction::decode(&[0x0006_001f, 1, 2, 2, 2, 16]).unwrap();
    assert_eq!(instruction.verify(), Err(CheckError::SamplerParamFlag(2)));

    if let Instruction::ConstantSampler(record) = instruction {
        assert_eq!(record.filter, SamplerFilterMode::Nearest);
    } else {
        panic!("wrong shape");
    }
}

#[test]
fn integer_type_signedness() {
    roundtrip(&[0x0004_000a, 1, 32, 1]);

    let instruction = Instruction::decode(&[0x0004_000a, 1, 32, 2]).unwrap();
    assert_eq!(instruction.verify(), Err(CheckError::IntSignedness(2)));
}

#[test]
fn phi_operands_come_in_pairs() {
    roundtrip(&[0x0007_0030, 1, 2, 3, 4, 5, 6]);

    let empty = Instruction::decode(&[0x0003_0030, 1, 2]).unwrap();
    assert_eq!(empty.verify(), Err(CheckError::EmptyPhi));

    let odd = Instruction::decode(&[0x0006_0030, 1, 2, 3, 4, 5]).unwrap();
    assert_eq!(odd.verify(), Err(CheckError::UnpairedPhiOperands));
}

#[test]
fn branch_weights_are_absent_or_two() {
    roundtrip(&[0x0004_00d2, 1, 2, 3]);
    roundtrip(&[0x0006_00d2, 1, 2, 3, 70, 30]);

    let one = Instruction::decode(&[0x0005_00d2, 1, 2, 3, 70]).unwrap();
    assert_eq!(one.verify(), Err(CheckError::BranchWeightCount));
}

#[test]
fn switch_targets_are_distinct_pairs() {
    roundtrip(&[0x0007_00d3, 1, 2, 10, 3, 20, 4]);

    let odd = Instruction::decode(&[0x0004_00d3, 1, 2, 10]).unwrap();
    assert_eq!(odd.verify(), Err(CheckError::UnpairedSwitchTargets));

    let duplicate = Instruction::decode(&[0x0007_00d3, 1, 2, 10, 3, 10, 4]).unwrap();
    assert_eq!(duplicate.verify(), Err(CheckError::DuplicateSwitchCase(10)));
}

#[test]
fn group_operations_require_group_local_scope() {
    let cases: &[(&[Word], &[Word])] = &[
        (
            &[0x0009_00db, 1, 2, 1, 3, 4, 5, 6, 7],
            &[0x0009_00db, 1, 2, 3, 3, 4, 5, 6, 7],
        ),
        (
            &[0x0006_00dc, 1, 2, 1, 3, 4],
            &[0x0006_00dc, 1, 2, 3, 3, 4],
        ),
        (&[0x0005_00dd, 1, 2, 1, 3], &[0x0005_00dd, 1, 2, 3, 3]),
        (&[0x0005_00de, 1, 2, 1, 3], &[0x0005_00de, 1, 2, 3, 3]),
        (
            &[0x0006_00df, 1, 2, 1, 3, 4],
            &[0x0006_00df, 1, 2, 3, 3, 4],
        ),
        (
            &[0x0006_00e0, 1, 2, 1, 0, 4],
            &[0x0006_00e0, 1, 2, 3, 0, 4],
        ),
        (
            &[0x0006_00e7, 1, 2, 1, 0, 4],
            &[0x0006_00e7, 1, 2, 2, 0, 4],
        ),
        (
            &[0x0006_00f5, 1, 2, 1, 3, 4],
            &[0x0006_00f5, 1, 2, 2, 3, 4],
        ),
        (&[0x0004_00f7, 1, 3, 4], &[0x0004_00f7, 2, 3, 4]),
    ];

    for (device_scoped, group_scoped) in cases {
        let rejected = Instruction::decode(device_scoped).unwrap();
        assert_eq!(rejected.verify(), Err(CheckError::BadGroupScope));

        roundtrip(group_scoped);
    }
}

#[test]
fn async_group_copy_fields() {
    let instruction = roundtrip(&[0x0009_00db, 1, 2, 3, 3, 4, 5, 6, 7]);

    assert_eq!(
        instruction,
        Instruction::AsyncGroupCopy(ops::AsyncGroupCopy {
            result_type: 1,
            result_id: 2,
            scope: ExecutionScope::Subgroup,
            destination: 3,
            source: 4,
            element_count: 5,
            stride: 6,
            event: 7,
        })
    );
}

#[test]
fn variable_length_tails_round_trip() {
    // Struct members, constant bit patterns, call arguments.
    roundtrip(&[0x0005_0012, 1, 2, 3, 4]);
    roundtrip(&[0x0002_0012, 1]);
    roundtrip(&[0x0005_001d, 1, 2, 0xffff_ffff, 0x7fff_ffff]);
    roundtrip(&[0x0006_002b, 1, 2, 3, 4, 5]);
    roundtrip(&[0x0010_00fa, 1, 2, 3, 0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]);
}

#[test]
fn memory_access_lists_validate_elementwise() {
    roundtrip(&[0x0006_002e, 1, 2, 3, 1, 3]);

    assert_eq!(
        Instruction::decode(&[0x0005_002e, 1, 2, 3, 4]),
        Err(DecodeError::InvalidOperand(OperandKind::MemoryAccess))
    );
    assert_eq!(
        Instruction::decode(&[0x0005_002e, 1, 2, 3, 0]),
        Err(DecodeError::InvalidOperand(OperandKind::MemoryAccess))
    );
}

#[test]
fn result_ids_follow_the_shape() {
    assert_eq!(roundtrip(&[0x0002_00d0, 7]).result_id(), Some(7));
    assert_eq!(roundtrip(&[0x0002_00d1, 7]).result_id(), None);

    // The entry point's embedded id references a function; it defines
    // nothing.
    assert_eq!(roundtrip(&[0x0003_0006, 4, 7]).result_id(), None);
}

// One representative wire vector per instruction category.
#[test]
fn category_sweep_round_trips() {
    let vectors: &[&[Word]] = &[
        // Extensions.
        &[0x0002_0003, 0],
        &[0x0004_0004, 1, 0x6c47_704f, 0x0000_0053],
        &[0x0007_002c, 1, 2, 3, 5, 6, 7],
        // Mode setting.
        &[0x0003_0005, 0, 1],
        &[0x0003_0006, 0, 1],
        // Type declarations.
        &[0x0002_0008, 1],
        &[0x0004_000c, 1, 2, 4],
        &[0x0004_000d, 1, 2, 4],
        &[0x0004_0014, 1, 2, 3],
        &[0x0005_0015, 1, 2, 3, 4],
        &[0x0004_001a, 1, 2, 2],
        // Constants.
        &[0x0003_001b, 1, 2],
        &[0x0005_001e, 1, 2, 3, 4],
        &[0x0003_0021, 1, 2],
        &[0x0004_0024, 1, 2, 7],
        // Memory.
        &[0x0005_0027, 1, 2, 4, 3],
        &[0x0004_0041, 1, 2, 1],
        &[0x0004_0042, 1, 2, 3],
        &[0x0005_0042, 1, 2, 3, 1],
        &[0x0006_005d, 1, 2, 3, 4, 5],
        &[0x0005_0079, 1, 2, 3, 0],
        &[0x0006_00be, 1, 2, 3, 4, 5],
        // Composites.
        &[0x0007_003c, 1, 2, 3, 4, 0, 1],
        &[0x0005_003e, 1, 2, 3, 1],
        &[0x0007_003f, 1, 2, 3, 4, 0, 1],
        &[0x0004_0040, 1, 2, 3],
        &[0x0004_0070, 1, 2, 3],
        // Conversions.
        &[0x0004_0064, 1, 2, 3],
        &[0x0004_006a, 1, 2, 3],
        &[0x0004_006f, 1, 2, 3],
        &[0x0005_00e8, 1, 2, 3, 8],
        // Arithmetic.
        &[0x0004_005f, 1, 2, 3],
        &[0x0005_007a, 1, 2, 3, 4],
        &[0x0005_0088, 1, 2, 3, 4],
        &[0x0005_008e, 1, 2, 3, 4],
        // Relational.
        &[0x0004_0062, 1, 2, 3],
        &[0x0004_0071, 1, 2, 3],
        &[0x0006_0098, 1, 2, 3, 4, 5],
        &[0x0005_009a, 1, 2, 3, 4],
        &[0x0005_00ae, 1, 2, 3, 4],
        // Derivatives.
        &[0x0004_00af, 1, 2, 3],
        &[0x0004_00b7, 1, 2, 3],
        // Primitives.
        &[0x0001_00b8],
        &[0x0002_00ba, 1],
        // Barriers.
        &[0x0002_00bc, 2],
        &[0x0003_00bd, 2, 16],
        // Atomics.
        &[0x0003_00bf, 1, 2],
        &[0x0006_00c0, 1, 2, 3, 1, 2],
        &[0x0008_00c3, 1, 2, 3, 1, 4, 5, 6],
        &[0x0007_00cd, 1, 2, 3, 1, 2, 4],
        // Textures.
        &[0x0005_0043, 1, 2, 3, 4],
        &[0x0005_0044, 1, 2, 3, 4],
        &[0x0006_0044, 1, 2, 3, 4, 5],
        &[0x0006_0051, 1, 2, 3, 4, 5],
        &[0x0008_0050, 1, 2, 3, 4, 5, 6, 7],
        &[0x0004_005b, 1, 2, 3],
        // Flow control.
        &[0x0003_00ce, 1, 1],
        &[0x0003_00cf, 1, 2],
        &[0x0002_00d6, 1],
        &[0x0001_00d4],
        &[0x0001_00d5],
        &[0x0001_00d7],
        &[0x0003_00d8, 1, 16],
        // Pipes.
        &[0x0005_00ea, 1, 2, 3, 4],
        &[0x0007_00ed, 1, 2, 3, 4, 5, 6],
        &[0x0005_00ee, 1, 2, 3, 4],
        &[0x0003_00f0, 1, 2],
        &[0x0004_00f3, 1, 2, 3],
        // Device-side enqueue.
        &[0x0007_00f9, 1, 2, 3, 4, 5, 6],
        &[0x0005_00fb, 1, 2, 3, 4],
        &[0x0004_00fd, 1, 2, 3],
        &[0x0002_00ff, 1],
        &[0x0003_0101, 1, 2],
        &[0x0003_0103, 1, 2],
        &[0x0004_0104, 1, 1, 2],
        &[0x0003_0105, 1, 2],
        &[0x0006_0106, 1, 2, 3, 4, 5],
        // Miscellaneous.
        &[0x0003_002d, 1, 2],
    ];

    for words in vectors {
        roundtrip(words);
    }
}

#[test]
fn debug_shapes_are_marked_optional() {
    let debug = [
        vec![0x0003_0001, 0, 0],
        vec![0x0002_0002, 0],
        vec![0x0003_0036, 1, 0],
        vec![0x0004_0037, 1, 0, 0],
        vec![0x0003_0038, 1, 0],
        vec![0x0005_0039, 1, 2, 3, 4],
    ];

    for words in debug {
        assert!(Instruction::decode(&words).unwrap().is_debug());
    }

    assert!(!roundtrip(&[0x0002_00d0, 1]).is_debug());
}
