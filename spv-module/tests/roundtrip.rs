use spv_asm::operand::OptionalId;
use spv_asm::{
    op, AddressingModel, ExecutionMode, ExecutionModel, FunctionControl, MemoryModel,
    SourceLanguage, StorageClass,
};
use spv_module::{Decoder, Encoder, Error, Header, HeaderError, Module, MAGIC_BE, MAGIC_LE};

fn valid_module() -> Module {
    let mut module = Module::new();
    module.header.bound = 8;
    module.instructions = vec![
        op::source(SourceLanguage::Glsl, 450),
        op::compile_flag("fast-math".into()),
        op::memory_model(AddressingModel::Logical, MemoryModel::Glsl450),
        op::entry_point(ExecutionModel::Fragment, 1),
        op::execution_mode(1, ExecutionMode::OriginUpperLeft, vec![]),
        op::name(1, "main".into()),
        op::type_void(2),
        op::type_function(3, 2, vec![]),
        op::type_int(5, 32, 0),
        op::variable(5, 6, StorageClass::PrivateGlobal, OptionalId::NONE),
        op::function(2, 1, FunctionControl::INLINE, 3),
        op::label(4),
        op::branch(4),
        op::function_end(),
    ];
    module
}

#[test]
fn little_endian_header_bytes() {
    let bytes = [
        0x03, 0x02, 0x23, 0x07, // magic, little-endian
        0x63, 0x00, 0x00, 0x00, // version 99
        0x01, 0x00, 0x00, 0x00, // generator
        0xff, 0x00, 0x00, 0x00, // bound
        0x00, 0x00, 0x00, 0x00, // reserved
    ];

    let header = Decoder::new(&bytes[..]).read_header().unwrap();
    assert_eq!(
        header,
        Header { magic: MAGIC_LE, version: 99, generator: 1, bound: 255, reserved: 0 }
    );

    let mut out = Vec::new();
    Encoder::new(&mut out).write_header(&header).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn big_endian_header_bytes() {
    let bytes = [
        0x07, 0x23, 0x02, 0x03, // magic, big-endian
        0x00, 0x00, 0x00, 0x63, // version 99
        0x00, 0x00, 0x00, 0x01, // generator
        0x00, 0x00, 0x00, 0xff, // bound
        0x00, 0x00, 0x00, 0x00, // reserved
    ];

    let header = Decoder::new(&bytes[..]).read_header().unwrap();
    assert_eq!(
        header,
        Header { magic: MAGIC_BE, version: 99, generator: 1, bound: 255, reserved: 0 }
    );

    let mut out = Vec::new();
    Encoder::new(&mut out).write_header(&header).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn header_decode_failures() {
    assert!(matches!(
        Decoder::new(&[][..]).read_header(),
        Err(Error::UnexpectedEndOfStream)
    ));
    assert!(matches!(
        Decoder::new(&[0x01, 0x02, 0x03, 0x04][..]).read_header(),
        Err(Error::Header(HeaderError::InvalidMagic))
    ));
    // A valid magic with the rest of the header missing.
    assert!(matches!(
        Decoder::new(&[0x03, 0x02, 0x23, 0x07][..]).read_header(),
        Err(Error::UnexpectedEndOfStream)
    ));
}

#[test]
fn instruction_words_distinguish_eof_kinds() {
    // Count says two words, only one present.
    let bytes = [0x01, 0x00, 0x02, 0x00];
    let mut decoder = Decoder::new(&bytes[..]);
    assert!(matches!(
        decoder.read_instruction_words(),
        Err(Error::UnexpectedEndOfStream)
    ));

    // A clean boundary is not an error.
    let bytes = [0x01, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00];
    let mut decoder = Decoder::new(&bytes[..]);
    assert_eq!(
        decoder.read_instruction_words().unwrap(),
        Some(&[0x0002_0001, 0x0000_0001][..])
    );
    assert_eq!(decoder.read_instruction_words().unwrap(), None);

    // A zero word count can never make progress.
    let bytes = [0x00, 0x00, 0x00, 0x00];
    let mut decoder = Decoder::new(&bytes[..]);
    assert!(matches!(
        decoder.read_instruction_words(),
        Err(Error::InvalidWordCount)
    ));
}

#[test]
fn encoder_rejects_mismatched_word_counts() {
    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out);
    encoder.write_header(&Header::new()).unwrap();
    assert!(matches!(
        encoder.write_instruction_words(&[0x0002_0001]),
        Err(Error::InvalidWordCount)
    ));
}

#[test]
fn encoder_rejects_unknown_magic() {
    let mut header = Header::new();
    header.magic = 123;

    let mut out = Vec::new();
    assert!(matches!(
        Encoder::new(&mut out).write_header(&header),
        Err(Error::Header(HeaderError::InvalidMagic))
    ));
}

#[test]
fn module_round_trips_bitwise() {
    let module = valid_module();
    module.verify().unwrap();

    let mut bytes = Vec::new();
    module.save(&mut bytes).unwrap();

    let loaded = Module::load(&bytes[..]).unwrap();
    assert_eq!(loaded, module);

    // Saving the loaded module reproduces the bytes exactly.
    let mut again = Vec::new();
    loaded.save(&mut again).unwrap();
    assert_eq!(again, bytes);
}

#[test]
fn byte_orders_are_symmetric() {
    let little = valid_module();

    let mut big = little.clone();
    big.header.magic = MAGIC_BE;
    big.verify().unwrap();

    let mut little_bytes = Vec::new();
    little.save(&mut little_bytes).unwrap();
    let mut big_bytes = Vec::new();
    big.save(&mut big_bytes).unwrap();

    assert_ne!(little_bytes, big_bytes);
    assert_eq!(&big_bytes[..4], [0x07, 0x23, 0x02, 0x03]);

    let from_little = Module::load(&little_bytes[..]).unwrap();
    let from_big = Module::load(&big_bytes[..]).unwrap();

    // Same in-memory module either way, modulo the declared byte order.
    assert_eq!(from_little.instructions, from_big.instructions);
    assert_eq!(from_big.header.magic, MAGIC_BE);
}

#[test]
fn load_rejects_truncated_instruction_streams() {
    let mut bytes = Vec::new();
    valid_module().save(&mut bytes).unwrap();
    bytes.truncate(bytes.len() - 2);

    assert!(matches!(
        Module::load(&bytes[..]),
        Err(Error::UnexpectedEndOfStream)
    ));
}
