#![cfg_attr(not(feature = "std"), no_std)]

//! Instruction set of the SPIR-V draft-99 binary module format.
//!
//! Each opcode owns a typed record shape declared once in the
//! `impl_instructions!` table below; the [`Opcode`] and [`Instruction`] enums,
//! the word-level codec and the shorthand constructors in [`op`] are all
//! derived from it. See the `macros` module documentation for the mechanics.

extern crate alloc;

#[macro_use]
mod macros;

mod args;
mod checks;
mod errors;
mod instruction;
mod opcode;
pub mod operand;

#[cfg(test)]
mod encoding_tests;

pub use args::*;
pub use errors::{CheckError, DecodeError, InvalidOperand, OperandKind};
pub use opcode::{decode_opcode, encode_opcode};
pub use operand::{Operand, OptionalId};
pub use spv_types::{Id, LitString, Word};

use alloc::vec::Vec;

impl_instructions! {
    "Reserved no-op. Decodable in shape, never accepted."
    0x0000 Nop nop []
    "Names the source language the module was translated from. Debug only."
    0x0001 Source source [source_language: SourceLanguage, version: Word]
    "Names an extension to the source language. Debug only."
    0x0002 SourceExtension source_extension [extension: LitString]
    "Declares use of an extension to the module format."
    0x0003 Extension extension [name: LitString]
    "Imports an extended instruction set under a result id."
    0x0004 ExtInstImport ext_inst_import [result_id: Id, name: LitString]
    "Sets the addressing and memory model for the whole module."
    0x0005 MemoryModel memory_model [addressing_model: AddressingModel, memory_model: crate::MemoryModel]
    "Nominates a function as an externally callable entry point."
    0x0006 EntryPoint entry_point [execution_model: ExecutionModel, entry_point: Id]
    "Declares an execution mode for an entry point."
    0x0007 ExecutionMode execution_mode [entry_point: Id, mode: crate::ExecutionMode, operands: Vec<Word>]
    "Declares the void type."
    0x0008 TypeVoid type_void [result_id: Id]
    "Declares the boolean type."
    0x0009 TypeBool type_bool [result_id: Id]
    "Declares an integer type of the given width and signedness."
    0x000a TypeInt type_int [result_id: Id, width: Word, signedness: Word]
    "Declares an IEEE 754 floating-point type of the given width."
    0x000b TypeFloat type_float [result_id: Id, width: Word]
    "Declares a vector type."
    0x000c TypeVector type_vector [result_id: Id, component_type: Id, component_count: Word]
    "Declares a matrix type; columns are vectors."
    0x000d TypeMatrix type_matrix [result_id: Id, column_type: Id, column_count: Word]
    "Declares an opaque sampler type."
    0x000e TypeSampler type_sampler [result_id: Id, sampled_type: Id, dim: Dimensionality, content: Word, arrayed: Word, compare: Word, multisampled: Word, access_qualifier: OptionalId]
    "Declares an opaque filter type, consumed by sampler construction."
    0x000f TypeFilter type_filter [result_id: Id]
    "Declares an array type of a constant length."
    0x0010 TypeArray type_array [result_id: Id, element_type: Id, length: Id]
    "Declares an array type whose length is unknown at compile time."
    0x0011 TypeRuntimeArray type_runtime_array [result_id: Id, element_type: Id]
    "Declares a structure type over heterogeneous members."
    0x0012 TypeStruct type_struct [result_id: Id, member_types: Vec<Id>]
    "Declares a named structure type with no body."
    0x0013 TypeOpaque type_opaque [result_id: Id, name: LitString]
    "Declares a pointer type into the given storage class."
    0x0014 TypePointer type_pointer [result_id: Id, storage_class: StorageClass, pointee_type: Id]
    "Declares a function type from return and parameter types."
    0x0015 TypeFunction type_function [result_id: Id, return_type: Id, parameter_types: Vec<Id>]
    "Declares an event object type."
    0x0016 TypeEvent type_event [result_id: Id]
    "Declares a device-side event object type."
    0x0017 TypeDeviceEvent type_device_event [result_id: Id]
    "Declares a pipe reservation object type."
    0x0018 TypeReserveId type_reserve_id [result_id: Id]
    "Declares a queue object type."
    0x0019 TypeQueue type_queue [result_id: Id]
    "Declares a pipe object type."
    0x001a TypePipe type_pipe [result_id: Id, data_type: Id, access_qualifier: AccessQualifier]
    "Declares a true boolean scalar constant."
    0x001b ConstantTrue constant_true [result_type: Id, result_id: Id]
    "Declares a false boolean scalar constant."
    0x001c ConstantFalse constant_false [result_type: Id, result_id: Id]
    "Declares a scalar constant from its bit pattern, low words first."
    0x001d Constant constant [result_type: Id, result_id: Id, value: Vec<Word>]
    "Declares a composite constant from constituent constants."
    0x001e ConstantComposite constant_composite [result_type: Id, result_id: Id, constituents: Vec<Id>]
    "Declares a sampler constant."
    0x001f ConstantSampler constant_sampler [result_type: Id, result_id: Id, addressing: SamplerAddressingMode, param: Word, filter: SamplerFilterMode]
    "Declares a null pointer constant."
    0x0020 ConstantNullPointer constant_null_pointer [result_type: Id, result_id: Id]
    "Declares a null queue, event or reservation constant."
    0x0021 ConstantNullObject constant_null_object [result_type: Id, result_id: Id]
    "Declares a boolean specialization constant defaulting to true."
    0x0022 SpecConstantTrue spec_constant_true [result_type: Id, result_id: Id]
    "Declares a boolean specialization constant defaulting to false."
    0x0023 SpecConstantFalse spec_constant_false [result_type: Id, result_id: Id]
    "Declares a scalar specialization constant from its default bit pattern."
    0x0024 SpecConstant spec_constant [result_type: Id, result_id: Id, value: Vec<Word>]
    "Declares a composite specialization constant."
    0x0025 SpecConstantComposite spec_constant_composite [result_type: Id, result_id: Id, constituents: Vec<Id>]
    "Allocates an object in memory and yields a pointer to it."
    0x0026 Variable variable [result_type: Id, result_id: Id, storage_class: StorageClass, initializer: OptionalId]
    "Allocates N objects sequentially and yields a pointer to the first."
    0x0027 VariableArray variable_array [result_type: Id, result_id: Id, storage_class: StorageClass, count: Id]
    "Opens a function body, terminated by the next function-end."
    0x0028 Function function [result_type: Id, result_id: Id, control: FunctionControl, function_type: Id]
    "Declares a formal parameter of the current function."
    0x0029 FunctionParameter function_parameter [result_type: Id, result_id: Id]
    "Closes a function body."
    0x002a FunctionEnd function_end []
    "Calls a function, possibly before its body is defined."
    0x002b FunctionCall function_call [result_type: Id, result_id: Id, function: Id, arguments: Vec<Id>]
    "Executes an instruction from an imported extended set."
    0x002c ExtInst ext_inst [result_type: Id, result_id: Id, set: Id, instruction: Word, operands: Vec<Id>]
    "Makes an intermediate object with no initialization."
    0x002d Undef undef [result_type: Id, result_id: Id]
    "Loads through a pointer."
    0x002e Load load [result_type: Id, result_id: Id, pointer: Id, memory_access: Vec<MemoryAccess>]
    "Stores through a pointer."
    0x002f Store store [pointer: Id, object: Id, memory_access: Vec<MemoryAccess>]
    "The SSA phi function, over (value, parent-block) pairs."
    0x0030 Phi phi [result_type: Id, result_id: Id, operands: Vec<Id>]
    "Collects decorations applied by preceding decorate records."
    0x0031 DecorationGroup decoration_group [result_id: Id]
    "Adds a decoration to another id."
    0x0032 Decorate decorate [target: Id, decoration: Decoration, operands: Vec<Word>]
    "Adds a decoration to a member of a structure type."
    0x0033 MemberDecorate member_decorate [struct_type: Id, member: Word, decoration: Decoration, operands: Vec<Word>]
    "Applies a decoration group to a list of target ids."
    0x0034 GroupDecorate group_decorate [group: Id, targets: Vec<Id>]
    "Applies a decoration group to structure members."
    0x0035 GroupMemberDecorate group_member_decorate [group: Id, targets: Vec<Id>]
    "Names a result id. Debug only."
    0x0036 Name name [target: Id, name: LitString]
    "Names a member of a structure type. Debug only."
    0x0037 MemberName member_name [struct_type: Id, member: Word, name: LitString]
    "Holds a string for other debug records. Debug only."
    0x0038 DebugString debug_string [result_id: Id, string: LitString]
    "Attaches source-level location information. Debug only."
    0x0039 Line line [target: Id, file: Id, line: Word, column: Word]
    "Extracts a vector component at a runtime index."
    0x003a VectorExtractDynamic vector_extract_dynamic [result_type: Id, result_id: Id, vector: Id, index: Id]
    "Replaces a vector component at a runtime index."
    0x003b VectorInsertDynamic vector_insert_dynamic [result_type: Id, result_id: Id, vector: Id, component: Id, index: Id]
    "Builds a vector by shuffling components of two vectors."
    0x003c VectorShuffle vector_shuffle [result_type: Id, result_id: Id, vector1: Id, vector2: Id, components: Vec<Word>]
    "Builds a composite from constituent objects."
    0x003d CompositeConstruct composite_construct [result_type: Id, result_id: Id, constituents: Vec<Id>]
    "Extracts a part of a composite by literal indices."
    0x003e CompositeExtract composite_extract [result_type: Id, result_id: Id, composite: Id, indices: Vec<Word>]
    "Replaces a part of a composite by literal indices."
    0x003f CompositeInsert composite_insert [result_type: Id, result_id: Id, object: Id, composite: Id, indices: Vec<Word>]
    "Copies an object as-is under a new result id."
    0x0040 CopyObject copy_object [result_type: Id, result_id: Id, operand: Id]
    "Copies the pointee of one pointer over another."
    0x0041 CopyMemory copy_memory [target: Id, source: Id, memory_access: Vec<MemoryAccess>]
    "Copies a byte-counted region between pointers."
    0x0042 CopyMemorySized copy_memory_sized [target: Id, source: Id, size: Id, memory_access: Vec<MemoryAccess>]
    "Combines a sampler and a filter into a usable sampler object."
    0x0043 Sampler sampler [result_type: Id, result_id: Id, sampler: Id, filter: Id]
    "Samples a texture with an implicit level of detail."
    0x0044 TextureSample texture_sample [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, bias: OptionalId]
    "Samples a texture with a depth-comparison reference."
    0x0045 TextureSampleDref texture_sample_dref [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, dref: Id]
    "Samples a texture at an explicit level of detail."
    0x0046 TextureSampleLod texture_sample_lod [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, lod: Id]
    "Samples a texture with a projective coordinate."
    0x0047 TextureSampleProj texture_sample_proj [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, bias: OptionalId]
    "Samples a texture with explicit gradients."
    0x0048 TextureSampleGrad texture_sample_grad [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, dx: Id, dy: Id]
    "Samples a texture with a coordinate offset."
    0x0049 TextureSampleOffset texture_sample_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, offset: Id, bias: OptionalId]
    "Samples a texture projectively at an explicit level of detail."
    0x004a TextureSampleProjLod texture_sample_proj_lod [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, lod: Id]
    "Samples a texture projectively with explicit gradients."
    0x004b TextureSampleProjGrad texture_sample_proj_grad [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, dx: Id, dy: Id]
    "Samples a texture at an explicit level of detail with an offset."
    0x004c TextureSampleLodOffset texture_sample_lod_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, lod: Id, offset: Id]
    "Samples a texture projectively with an offset."
    0x004d TextureSampleProjOffset texture_sample_proj_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, offset: Id, bias: OptionalId]
    "Samples a texture with explicit gradients and an offset."
    0x004e TextureSampleGradOffset texture_sample_grad_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, dx: Id, dy: Id, offset: Id]
    "Samples a texture projectively at an explicit level of detail with an offset."
    0x004f TextureSampleProjLodOffset texture_sample_proj_lod_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, lod: Id, offset: Id]
    "Samples a texture projectively with explicit gradients and an offset."
    0x0050 TextureSampleProjGradOffset texture_sample_proj_grad_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, dx: Id, dy: Id, offset: Id]
    "Fetches a single texel at an explicit level of detail."
    0x0051 TextureFetchTexel texture_fetch_texel [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, lod: Id]
    "Fetches a single texel with a coordinate offset."
    0x0052 TextureFetchTexelOffset texture_fetch_texel_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, offset: Id]
    "Fetches a single sample from a multi-sampled texture."
    0x0053 TextureFetchSample texture_fetch_sample [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, sample: Id]
    "Fetches an element from a buffer texture."
    0x0054 TextureFetchBuffer texture_fetch_buffer [result_type: Id, result_id: Id, sampler: Id, element: Id]
    "Gathers one component from four texels."
    0x0055 TextureGather texture_gather [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, component: Id]
    "Gathers one component from four texels with an offset."
    0x0056 TextureGatherOffset texture_gather_offset [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, component: Id, offset: Id]
    "Gathers one component from four texels with per-texel offsets."
    0x0057 TextureGatherOffsets texture_gather_offsets [result_type: Id, result_id: Id, sampler: Id, coordinate: Id, component: Id, offsets: Id]
    "Queries texture dimensions at a level of detail."
    0x0058 TextureQuerySizeLod texture_query_size_lod [result_type: Id, result_id: Id, sampler: Id, lod: Id]
    "Queries texture dimensions."
    0x0059 TextureQuerySize texture_query_size [result_type: Id, result_id: Id, sampler: Id]
    "Queries the level of detail a sample would use."
    0x005a TextureQueryLod texture_query_lod [result_type: Id, result_id: Id, sampler: Id, coordinate: Id]
    "Queries the number of mipmap levels."
    0x005b TextureQueryLevels texture_query_levels [result_type: Id, result_id: Id, sampler: Id]
    "Queries the number of samples per texel."
    0x005c TextureQuerySamples texture_query_samples [result_type: Id, result_id: Id, sampler: Id]
    "Builds a pointer into a composite object."
    0x005d AccessChain access_chain [result_type: Id, result_id: Id, base: Id, indices: Vec<Id>]
    "Access chain whose result is known to stay within the base object."
    0x005e InBoundsAccessChain in_bounds_access_chain [result_type: Id, result_id: Id, base: Id, indices: Vec<Id>]
    "Signed integer negation."
    0x005f SNegate s_negate [result_type: Id, result_id: Id, operand: Id]
    "Floating-point negation."
    0x0060 FNegate f_negate [result_type: Id, result_id: Id, operand: Id]
    "Bitwise complement."
    0x0061 Not not [result_type: Id, result_id: Id, operand: Id]
    "True if any component of a boolean vector is true."
    0x0062 Any any [result_type: Id, result_id: Id, vector: Id]
    "True if all components of a boolean vector are true."
    0x0063 All all [result_type: Id, result_id: Id, vector: Id]
    "Converts floating point to unsigned integer."
    0x0064 ConvertFToU convert_f_to_u [result_type: Id, result_id: Id, value: Id]
    "Converts floating point to signed integer."
    0x0065 ConvertFToS convert_f_to_s [result_type: Id, result_id: Id, value: Id]
    "Converts signed integer to floating point."
    0x0066 ConvertSToF convert_s_to_f [result_type: Id, result_id: Id, value: Id]
    "Converts unsigned integer to floating point."
    0x0067 ConvertUToF convert_u_to_f [result_type: Id, result_id: Id, value: Id]
    "Changes unsigned integer width."
    0x0068 UConvert u_convert [result_type: Id, result_id: Id, value: Id]
    "Changes signed integer width."
    0x0069 SConvert s_convert [result_type: Id, result_id: Id, value: Id]
    "Changes floating-point width."
    0x006a FConvert f_convert [result_type: Id, result_id: Id, value: Id]
    "Converts a pointer to an unsigned integer."
    0x006b ConvertPtrToU convert_ptr_to_u [result_type: Id, result_id: Id, value: Id]
    "Converts an unsigned integer to a pointer."
    0x006c ConvertUToPtr convert_u_to_ptr [result_type: Id, result_id: Id, value: Id]
    "Casts a pointer into the generic storage class."
    0x006d PtrCastToGeneric ptr_cast_to_generic [result_type: Id, result_id: Id, source: Id]
    "Casts a generic pointer back to a concrete storage class."
    0x006e GenericCastToPtr generic_cast_to_ptr [result_type: Id, result_id: Id, source: Id]
    "Reinterprets the bit pattern under another type."
    0x006f Bitcast bitcast [result_type: Id, result_id: Id, operand: Id]
    "Matrix transpose."
    0x0070 Transpose transpose [result_type: Id, result_id: Id, matrix: Id]
    "Floating-point NaN test."
    0x0071 IsNan is_nan [result_type: Id, result_id: Id, x: Id]
    "Floating-point infinity test."
    0x0072 IsInf is_inf [result_type: Id, result_id: Id, x: Id]
    "Floating-point finiteness test."
    0x0073 IsFinite is_finite [result_type: Id, result_id: Id, x: Id]
    "Floating-point normality test."
    0x0074 IsNormal is_normal [result_type: Id, result_id: Id, x: Id]
    "Floating-point sign-bit test."
    0x0075 SignBitSet sign_bit_set [result_type: Id, result_id: Id, x: Id]
    "Floating-point orderable comparison test."
    0x0076 LessOrGreater less_or_greater [result_type: Id, result_id: Id, x: Id]
    "True if both operands are ordered floating-point values."
    0x0077 Ordered ordered [result_type: Id, result_id: Id, x: Id, y: Id]
    "True if either operand is an unordered floating-point value."
    0x0078 Unordered unordered [result_type: Id, result_id: Id, x: Id, y: Id]
    "Length of a run-time array member of a structure."
    0x0079 ArrayLength array_length [result_type: Id, result_id: Id, structure: Id, member: Word]
    "Integer addition."
    0x007a IAdd i_add [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point addition."
    0x007b FAdd f_add [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Integer subtraction."
    0x007c ISub i_sub [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point subtraction."
    0x007d FSub f_sub [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Integer multiplication."
    0x007e IMul i_mul [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point multiplication."
    0x007f FMul f_mul [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned integer division."
    0x0080 UDiv u_div [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed integer division."
    0x0081 SDiv s_div [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point division."
    0x0082 FDiv f_div [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned integer remainder."
    0x0083 UMod u_mod [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed remainder, sign of the dividend."
    0x0084 SRem s_rem [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed modulo, sign of the divisor."
    0x0085 SMod s_mod [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point remainder, sign of the dividend."
    0x0086 FRem f_rem [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point modulo, sign of the divisor."
    0x0087 FMod f_mod [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Scales a vector by a scalar."
    0x0088 VectorTimesScalar vector_times_scalar [result_type: Id, result_id: Id, vector: Id, scalar: Id]
    "Scales a matrix by a scalar."
    0x0089 MatrixTimesScalar matrix_times_scalar [result_type: Id, result_id: Id, matrix: Id, scalar: Id]
    "Row-vector times matrix."
    0x008a VectorTimesMatrix vector_times_matrix [result_type: Id, result_id: Id, vector: Id, matrix: Id]
    "Matrix times column-vector."
    0x008b MatrixTimesVector matrix_times_vector [result_type: Id, result_id: Id, matrix: Id, vector: Id]
    "Matrix multiplication."
    0x008c MatrixTimesMatrix matrix_times_matrix [result_type: Id, result_id: Id, left: Id, right: Id]
    "Outer product of two vectors."
    0x008d OuterProduct outer_product [result_type: Id, result_id: Id, vector1: Id, vector2: Id]
    "Dot product of two vectors."
    0x008e Dot dot [result_type: Id, result_id: Id, vector1: Id, vector2: Id]
    "Logical shift right."
    0x008f ShiftRightLogical shift_right_logical [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Arithmetic shift right."
    0x0090 ShiftRightArithmetic shift_right_arithmetic [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Logical shift left."
    0x0091 ShiftLeftLogical shift_left_logical [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Boolean or."
    0x0092 LogicalOr logical_or [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Boolean exclusive or."
    0x0093 LogicalXor logical_xor [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Boolean and."
    0x0094 LogicalAnd logical_and [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Bitwise or."
    0x0095 BitwiseOr bitwise_or [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Bitwise exclusive or."
    0x0096 BitwiseXor bitwise_xor [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Bitwise and."
    0x0097 BitwiseAnd bitwise_and [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Selects between two objects by a boolean condition."
    0x0098 Select select [result_type: Id, result_id: Id, condition: Id, object1: Id, object2: Id]
    "Integer equality."
    0x0099 IEqual i_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered equality."
    0x009a FOrdEqual f_ord_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered equality."
    0x009b FUnordEqual f_unord_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Integer inequality."
    0x009c INotEqual i_not_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered inequality."
    0x009d FOrdNotEqual f_ord_not_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered inequality."
    0x009e FUnordNotEqual f_unord_not_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned less-than."
    0x009f ULessThan u_less_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed less-than."
    0x00a0 SLessThan s_less_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered less-than."
    0x00a1 FOrdLessThan f_ord_less_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered less-than."
    0x00a2 FUnordLessThan f_unord_less_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned greater-than."
    0x00a3 UGreaterThan u_greater_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed greater-than."
    0x00a4 SGreaterThan s_greater_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered greater-than."
    0x00a5 FOrdGreaterThan f_ord_greater_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered greater-than."
    0x00a6 FUnordGreaterThan f_unord_greater_than [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned less-than-or-equal."
    0x00a7 ULessThanEqual u_less_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed less-than-or-equal."
    0x00a8 SLessThanEqual s_less_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered less-than-or-equal."
    0x00a9 FOrdLessThanEqual f_ord_less_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered less-than-or-equal."
    0x00aa FUnordLessThanEqual f_unord_less_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Unsigned greater-than-or-equal."
    0x00ab UGreaterThanEqual u_greater_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Signed greater-than-or-equal."
    0x00ac SGreaterThanEqual s_greater_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point ordered greater-than-or-equal."
    0x00ad FOrdGreaterThanEqual f_ord_greater_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Floating-point unordered greater-than-or-equal."
    0x00ae FUnordGreaterThanEqual f_unord_greater_than_equal [result_type: Id, result_id: Id, operand1: Id, operand2: Id]
    "Partial derivative in x."
    0x00af DPdx dpdx [result_type: Id, result_id: Id, p: Id]
    "Partial derivative in y."
    0x00b0 DPdy dpdy [result_type: Id, result_id: Id, p: Id]
    "Sum of absolute derivatives in x and y."
    0x00b1 Fwidth fwidth [result_type: Id, result_id: Id, p: Id]
    "Fine-granularity partial derivative in x."
    0x00b2 DPdxFine dpdx_fine [result_type: Id, result_id: Id, p: Id]
    "Fine-granularity partial derivative in y."
    0x00b3 DPdyFine dpdy_fine [result_type: Id, result_id: Id, p: Id]
    "Fine-granularity derivative width."
    0x00b4 FwidthFine fwidth_fine [result_type: Id, result_id: Id, p: Id]
    "Coarse-granularity partial derivative in x."
    0x00b5 DPdxCoarse dpdx_coarse [result_type: Id, result_id: Id, p: Id]
    "Coarse-granularity partial derivative in y."
    0x00b6 DPdyCoarse dpdy_coarse [result_type: Id, result_id: Id, p: Id]
    "Coarse-granularity derivative width."
    0x00b7 FwidthCoarse fwidth_coarse [result_type: Id, result_id: Id, p: Id]
    "Emits the current vertex values to the output stream."
    0x00b8 EmitVertex emit_vertex []
    "Finishes the current output primitive."
    0x00b9 EndPrimitive end_primitive []
    "Emits the current vertex values to a numbered stream."
    0x00ba EmitStreamVertex emit_stream_vertex [stream: Id]
    "Finishes the current primitive on a numbered stream."
    0x00bb EndStreamPrimitive end_stream_primitive [stream: Id]
    "Waits for other invocations in the scope to reach this point."
    0x00bc ControlBarrier control_barrier [scope: ExecutionScope]
    "Orders memory accesses around this point."
    0x00bd MemoryBarrier memory_barrier [scope: ExecutionScope, semantics: MemorySemantics]
    "Forms a pointer to a texel, for atomic use only."
    0x00be ImagePointer image_pointer [result_type: Id, result_id: Id, image: Id, coordinate: Id, sample: Id]
    "Non-atomically initializes an atomic location."
    0x00bf AtomicInit atomic_init [pointer: Id, value: Id]
    "Atomic load."
    0x00c0 AtomicLoad atomic_load [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics]
    "Atomic store."
    0x00c1 AtomicStore atomic_store [pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic exchange, yielding the original value."
    0x00c2 AtomicExchange atomic_exchange [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic compare-and-exchange, yielding the original value."
    0x00c3 AtomicCompareExchange atomic_compare_exchange [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id, comparator: Id]
    "Atomic compare-and-exchange that may fail spuriously."
    0x00c4 AtomicCompareExchangeWeak atomic_compare_exchange_weak [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id, comparator: Id]
    "Atomic increment, yielding the original value."
    0x00c5 AtomicIIncrement atomic_i_increment [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics]
    "Atomic decrement, yielding the original value."
    0x00c6 AtomicIDecrement atomic_i_decrement [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics]
    "Atomic integer addition, yielding the original value."
    0x00c7 AtomicIAdd atomic_i_add [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic integer subtraction, yielding the original value."
    0x00c8 AtomicISub atomic_i_sub [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic unsigned minimum, yielding the original value."
    0x00c9 AtomicUMin atomic_u_min [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic unsigned maximum, yielding the original value."
    0x00ca AtomicUMax atomic_u_max [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic bitwise and, yielding the original value."
    0x00cb AtomicAnd atomic_and [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic bitwise or, yielding the original value."
    0x00cc AtomicOr atomic_or [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Atomic bitwise exclusive or, yielding the original value."
    0x00cd AtomicXor atomic_xor [result_type: Id, result_id: Id, pointer: Id, scope: ExecutionScope, semantics: MemorySemantics, value: Id]
    "Declares a structured loop headed at the given merge block."
    0x00ce LoopMerge loop_merge [merge_block: Id, loop_control: LoopControl]
    "Declares a structured selection headed at the given merge block."
    0x00cf SelectionMerge selection_merge [merge_block: Id, selection_control: SelectionControl]
    "Labels the start of a block."
    0x00d0 Label label [result_id: Id]
    "Unconditional branch."
    0x00d1 Branch branch [target_label: Id]
    "Two-way conditional branch, with optional weights."
    0x00d2 BranchConditional branch_conditional [condition: Id, true_label: Id, false_label: Id, branch_weights: Vec<Word>]
    "Multi-way branch over (literal, label) pairs."
    0x00d3 Switch switch [selector: Id, default_label: Id, targets: Vec<Word>]
    "Discards the fragment."
    0x00d4 Kill kill []
    "Returns from a void function."
    0x00d5 Return return_ []
    "Returns a value from a function."
    0x00d6 ReturnValue return_value [value: Id]
    "Declares the block unreachable in the control-flow graph."
    0x00d7 Unreachable unreachable []
    "Marks the pointee undefined before this point."
    0x00d8 LifetimeStart lifetime_start [object: Id, memory_amount: Word]
    "Marks the pointee dead after this point."
    0x00d9 LifetimeStop lifetime_stop [object: Id, memory_amount: Word]
    "Records a compilation flag."
    0x00da CompileFlag compile_flag [flag: LitString]
    "Asynchronous group copy between memory regions, gated on an event."
    0x00db AsyncGroupCopy async_group_copy [result_type: Id, result_id: Id, scope: ExecutionScope, destination: Id, source: Id, element_count: Id, stride: Id, event: Id]
    "Waits for events from async group copies."
    0x00dc WaitGroupEvents wait_group_events [result_type: Id, result_id: Id, scope: ExecutionScope, event_count: Id, events_list: Id]
    "True if the predicate holds for all invocations in the group."
    0x00dd GroupAll group_all [result_type: Id, result_id: Id, scope: ExecutionScope, predicate: Id]
    "True if the predicate holds for any invocation in the group."
    0x00de GroupAny group_any [result_type: Id, result_id: Id, scope: ExecutionScope, predicate: Id]
    "Broadcasts a value from one invocation to the whole group."
    0x00df GroupBroadcast group_broadcast [result_type: Id, result_id: Id, scope: ExecutionScope, value: Id, local_id: Id]
    "Group integer addition."
    0x00e0 GroupIAdd group_i_add [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group floating-point addition."
    0x00e1 GroupFAdd group_f_add [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group floating-point minimum."
    0x00e2 GroupFMin group_f_min [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group unsigned minimum."
    0x00e3 GroupUMin group_u_min [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group signed minimum."
    0x00e4 GroupSMin group_s_min [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group floating-point maximum."
    0x00e5 GroupFMax group_f_max [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group unsigned maximum."
    0x00e6 GroupUMax group_u_max [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Group signed maximum."
    0x00e7 GroupSMax group_s_max [result_type: Id, result_id: Id, scope: ExecutionScope, operation: GroupOperation, x: Id]
    "Casts a generic pointer to a named storage class."
    0x00e8 GenericCastToPtrExplicit generic_cast_to_ptr_explicit [result_type: Id, result_id: Id, source_ptr: Id, storage_class: StorageClass]
    "Yields valid memory semantics for a generic pointer."
    0x00e9 GenericPtrMemSemantics generic_ptr_mem_semantics [result_type: Id, result_id: Id, pointer: Id]
    "Reads a packet from a pipe."
    0x00ea ReadPipe read_pipe [result_type: Id, result_id: Id, pipe: Id, pointer: Id]
    "Writes a packet to a pipe."
    0x00eb WritePipe write_pipe [result_type: Id, result_id: Id, pipe: Id, pointer: Id]
    "Reads a packet from a reserved pipe slot."
    0x00ec ReservedReadPipe reserved_read_pipe [result_type: Id, result_id: Id, pipe: Id, reserve_id: Id, index: Id, pointer: Id]
    "Writes a packet to a reserved pipe slot."
    0x00ed ReservedWritePipe reserved_write_pipe [result_type: Id, result_id: Id, pipe: Id, reserve_id: Id, index: Id, pointer: Id]
    "Reserves pipe packets for reading."
    0x00ee ReserveReadPipePackets reserve_read_pipe_packets [result_type: Id, result_id: Id, pipe: Id, packet_count: Id]
    "Reserves pipe packets for writing."
    0x00ef ReserveWritePipePackets reserve_write_pipe_packets [result_type: Id, result_id: Id, pipe: Id, packet_count: Id]
    "Commits a read reservation."
    0x00f0 CommitReadPipe commit_read_pipe [pipe: Id, reserve_id: Id]
    "Commits a write reservation."
    0x00f1 CommitWritePipe commit_write_pipe [pipe: Id, reserve_id: Id]
    "Tests whether a reservation id is valid."
    0x00f2 IsValidReserveId is_valid_reserve_id [result_type: Id, result_id: Id, reserve_id: Id]
    "Number of packets currently in a pipe."
    0x00f3 GetNumPipePackets get_num_pipe_packets [result_type: Id, result_id: Id, pipe: Id]
    "Capacity of a pipe in packets."
    0x00f4 GetMaxPipePackets get_max_pipe_packets [result_type: Id, result_id: Id, pipe: Id]
    "Group-wide read reservation of pipe packets."
    0x00f5 GroupReserveReadPipePackets group_reserve_read_pipe_packets [result_type: Id, result_id: Id, scope: ExecutionScope, pipe: Id, packet_count: Id]
    "Group-wide write reservation of pipe packets."
    0x00f6 GroupReserveWritePipePackets group_reserve_write_pipe_packets [result_type: Id, result_id: Id, scope: ExecutionScope, pipe: Id, packet_count: Id]
    "Group-wide commit of a read reservation."
    0x00f7 GroupCommitReadPipe group_commit_read_pipe [scope: ExecutionScope, pipe: Id, reserve_id: Id]
    "Group-wide commit of a write reservation."
    0x00f8 GroupCommitWritePipe group_commit_write_pipe [scope: ExecutionScope, pipe: Id, reserve_id: Id]
    "Enqueues a marker that fires when prior kernels complete."
    0x00f9 EnqueueMarker enqueue_marker [result_type: Id, result_id: Id, queue: Id, event_count: Id, wait_events: Id, ret_event: Id]
    "Enqueues a kernel for execution on a device queue."
    0x00fa EnqueueKernel enqueue_kernel [result_type: Id, result_id: Id, queue: Id, flags: KernelEnqueueFlags, nd_range: Id, event_count: Id, wait_events: Id, ret_event: Id, invoke: Id, param: Id, param_size: Id, param_align: Id, local_size: Vec<Id>]
    "Subgroup count a kernel would use over an ND-range."
    0x00fb GetKernelNDrangeSubGroupCount get_kernel_ndrange_sub_group_count [result_type: Id, result_id: Id, nd_range: Id, invoke: Id]
    "Maximum subgroup size a kernel would use over an ND-range."
    0x00fc GetKernelNDrangeMaxSubGroupSize get_kernel_ndrange_max_sub_group_size [result_type: Id, result_id: Id, nd_range: Id, invoke: Id]
    "Maximum work-group size a kernel can use."
    0x00fd GetKernelWorkGroupSize get_kernel_work_group_size [result_type: Id, result_id: Id, invoke: Id]
    "Preferred work-group size multiple of a kernel."
    0x00fe GetKernelPreferredWorkGroupSizeMultiple get_kernel_preferred_work_group_size_multiple [result_type: Id, result_id: Id, invoke: Id]
    "Increments an event's reference count."
    0x00ff RetainEvent retain_event [event: Id]
    "Decrements an event's reference count."
    0x0100 ReleaseEvent release_event [event: Id]
    "Creates a user event."
    0x0101 CreateUserEvent create_user_event [result_type: Id, result_id: Id]
    "Tests whether an event is valid."
    0x0102 IsValidEvent is_valid_event [result_type: Id, result_id: Id, event: Id]
    "Sets the execution status of a user event."
    0x0103 SetUserEventStatus set_user_event_status [event: Id, status: Id]
    "Captures profiling information for an event."
    0x0104 CaptureEventProfilingInfo capture_event_profiling_info [event: Id, info: KernelProfilingInfo, value: Id]
    "Yields the device's default queue."
    0x0105 GetDefaultQueue get_default_queue [result_type: Id, result_id: Id]
    "Builds an ND-range description."
    0x0106 BuildNDRange build_nd_range [result_type: Id, result_id: Id, global_work_size: Id, local_work_size: Id, global_work_offset: Id]
}
