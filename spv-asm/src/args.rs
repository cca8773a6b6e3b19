//! Enumerated and bitmask operand families.
//!
//! Sequential families are `u32`-repr enums whose `TryFrom<Word>` is the
//! validity predicate; bitmask families preserve raw bits and expose
//! `verify`. Values and ranges follow the draft-99 instruction set tables.

operand_enum! {
    /// Source language annotated by a source record. Informational only.
    pub enum SourceLanguage {
        Unknown = 0,
        Essl = 1,
        Glsl = 2,
        OpenCl = 3,
    }
}

operand_enum! {
    /// Pipeline stage a set of instructions belongs to, named by an
    /// entry-point record.
    pub enum ExecutionModel {
        /// Vertex shading stage.
        Vertex = 0,
        /// Tessellation control (or hull) shading stage.
        TessellationControl = 1,
        /// Tessellation evaluation (or domain) shading stage.
        TessellationEvaluation = 2,
        /// Geometry shading stage.
        Geometry = 3,
        /// Fragment shading stage.
        Fragment = 4,
        /// Graphical compute shading stage.
        GlCompute = 5,
        /// Compute kernel.
        Kernel = 6,
    }
}

operand_enum! {
    /// Addressing mode declared by the module's memory model.
    pub enum AddressingModel {
        Logical = 0,
        Physical32 = 1,
        Physical64 = 2,
    }
}

operand_enum! {
    /// Memory consistency model declared by the module's memory model.
    pub enum MemoryModel {
        /// No shared memory consistency issues.
        Simple = 0,
        /// Memory model needed by later versions of GLSL and ESSL.
        Glsl450 = 1,
        /// OpenCL 1.2 memory model.
        OpenCl12 = 2,
        /// OpenCL 2.0 memory model.
        OpenCl20 = 3,
        /// OpenCL 2.1 memory model.
        OpenCl21 = 4,
    }
}

operand_enum! {
    /// Mode a stage will execute in.
    ///
    /// Modes `Invocations`, `OutputVertices` and `VecTypeHint` carry one
    /// extra operand; `LocalSize` and `LocalSizeHint` carry three; the rest
    /// carry none. The execution-mode record enforces this.
    pub enum ExecutionMode {
        /// Number of times to invoke the geometry stage per input primitive.
        Invocations = 0,
        SpacingEqual = 1,
        SpacingFractionalEven = 2,
        SpacingFractionalOdd = 3,
        VertexOrderCw = 4,
        VertexOrderCcw = 5,
        /// Pixels appear centered on whole-number pixel offsets.
        PixelCenterInteger = 6,
        /// Pixel coordinates originate in the upper left.
        OriginUpperLeft = 7,
        /// Fragment tests run before fragment shader execution.
        EarlyFragmentTests = 8,
        PointMode = 9,
        /// The stage runs in transform-feedback-capturing mode.
        Xfb = 10,
        /// Must be declared if the module potentially changes fragment depth.
        DepthReplacing = 11,
        DepthAny = 12,
        DepthGreater = 13,
        DepthLess = 14,
        DepthUnchanged = 15,
        /// Work-group size in x, y and z.
        LocalSize = 16,
        /// Compiler hint for the most likely work-group size.
        LocalSizeHint = 17,
        InputPoints = 18,
        InputLines = 19,
        InputLinesAdjacency = 20,
        InputTriangles = 21,
        InputTrianglesAdjacency = 22,
        InputQuads = 23,
        InputIsolines = 24,
        /// Maximum vertices a single invocation will ever emit.
        OutputVertices = 25,
        OutputPoints = 26,
        OutputLineStrip = 27,
        OutputTriangleStrip = 28,
        /// Compiler hint: operations are vectorized with this type.
        VecTypeHint = 29,
        /// Floating-point expression contraction is disallowed.
        ContractionOff = 30,
    }
}

operand_enum! {
    /// Class of storage backing a declared variable.
    pub enum StorageClass {
        /// Shared externally, read-only. Graphics uniform memory, OpenCL
        /// constant memory.
        UniformConstant = 0,
        /// Input from the pipeline, read only.
        Input = 1,
        /// Shared externally, visible across all instantiations.
        Uniform = 2,
        /// Output to the pipeline.
        Output = 3,
        /// Shared across all work items within a work group.
        WorkgroupLocal = 4,
        /// Visible to all work items of all work groups.
        WorkgroupGlobal = 5,
        /// Accessible across functions within the module, non-IO.
        PrivateGlobal = 6,
        /// Local to a function.
        Function = 7,
        /// A generic pointer overloading private, local and global. Not a
        /// real storage class.
        Generic = 8,
        /// Private to a work item.
        Private = 9,
        /// Holds atomic counters.
        AtomicCounter = 10,
    }
}

operand_enum! {
    /// Texture dimensionality.
    pub enum Dimensionality {
        Dim1D = 0,
        Dim2D = 1,
        Dim3D = 2,
        Cube = 3,
        Rect = 4,
        Buffer = 5,
    }
}

operand_enum! {
    /// Addressing mode of a sampler constant. Only even values are declared.
    pub enum SamplerAddressingMode {
        /// Coordinates must refer to a location inside the image.
        None = 0,
        /// Out-of-range coordinates clamp to the extent.
        ClampEdge = 2,
        /// Out-of-range coordinates return a border color.
        Clamp = 4,
        /// Out-of-range coordinates wrap to the valid range.
        Repeat = 6,
        /// The coordinate flips at every integer junction.
        RepeatMirrored = 8,
    }
}

operand_enum! {
    /// Filter mode of a sampler constant. Only two values are declared.
    pub enum SamplerFilterMode {
        Nearest = 16,
        Linear = 32,
    }
}

operand_enum! {
    /// Attribute attached to a function's return value or parameter.
    pub enum FunctionParameterAttribute {
        /// Zero-extend the value if needed.
        Zext = 0,
        /// Sign-extend the value if needed.
        Sext = 1,
        /// Pass the pointer parameter by value.
        ByVal = 2,
        /// The pointer addresses the function's source-level return value.
        Sret = 3,
        /// The pointee is only reached through this pointer.
        NoAlias = 4,
        /// The callee does not capture the pointer.
        NoCapture = 5,
        Svm = 6,
        /// The pointee is only read.
        NoWrite = 7,
        /// The pointee is neither read nor written.
        NoReadWrite = 8,
    }
}

operand_enum! {
    /// Auxiliary annotation attached to an id or struct member.
    ///
    /// The parameterized decorations (`Stream` through `SpecId`) take exactly
    /// one operand; the decorate records enforce the counts, and a
    /// `LinkageType` argument is range-checked as a linkage type.
    pub enum Decoration {
        PrecisionLow = 0,
        PrecisionMedium = 1,
        PrecisionHigh = 2,
        /// Marks a structure type as a non-SSBO-like interface block.
        Block = 3,
        /// Marks a structure type as an SSBO-like interface block.
        BufferBlock = 4,
        /// Matrix rows are contiguous in memory.
        RowMajor = 5,
        /// Matrix columns are contiguous in memory.
        ColMajor = 6,
        GlslShared = 7,
        GlslStd140 = 8,
        GlslStd430 = 9,
        GlslPacked = 10,
        /// Perspective-correct interpolation.
        Smooth = 11,
        /// Linear, non-perspective-correct interpolation.
        NoPerspective = 12,
        /// No interpolation.
        Flat = 13,
        /// A tessellation patch.
        Patch = 14,
        Centroid = 15,
        /// Per-sample interpolation under multi-sampling.
        Sample = 16,
        Invariant = 17,
        /// The compiler may assume no aliasing.
        Restrict = 18,
        /// Accesses must stay correct in the presence of aliasing.
        Aliased = 19,
        Volatile = 20,
        /// The global variable is never modified.
        Constant = 21,
        Coherent = 22,
        NonWritable = 23,
        NonReadable = 24,
        /// The backing value is dynamically uniform across parallel
        /// instantiations.
        Uniform = 25,
        /// The module neither reads nor writes the variable.
        NoStaticUse = 26,
        /// The structure is packed: alignment one, no padding.
        CPacked = 27,
        /// Conversions to integer types saturate.
        SaturatedConversion = 28,
        /// Output stream number. One operand.
        Stream = 29,
        /// Interface location. One operand.
        Location = 30,
        /// Component within a location. One operand.
        Component = 31,
        /// Blend equation input index. One operand.
        Index = 32,
        /// Binding point. One operand.
        Binding = 33,
        /// Descriptor set. One operand.
        DescriptorSet = 34,
        /// Byte offset of a structure member. One operand.
        Offset = 35,
        /// Declared alignment. One operand.
        Alignment = 36,
        /// Transform-feedback buffer number. One operand.
        XfbBuffer = 37,
        /// Array-element or transform-feedback stride in bytes. One operand.
        Stride = 38,
        /// The entity represents a built-in variable. One operand.
        BuiltIn = 39,
        /// A function parameter attribute. One operand.
        FuncParamAttr = 40,
        /// A floating-point rounding mode. One operand.
        FpRoundingMode = 41,
        /// A floating-point fast-math mode. One operand.
        FpFastMathMode = 42,
        /// A linkage type; only valid on functions and module-scope
        /// variables. One operand, itself range-checked.
        LinkageType = 43,
        /// Specialization constant id. One operand.
        SpecId = 44,
    }
}

operand_enum! {
    /// Built-in variable named by a `BuiltIn` decoration.
    pub enum BuiltIn {
        Position = 0,
        PointSize = 1,
        ClipVertex = 2,
        ClipDistance = 3,
        CullDistance = 4,
        VertexId = 5,
        InstanceId = 6,
        PrimitiveId = 7,
        InvocationId = 8,
        Layer = 9,
        ViewportIndex = 10,
        TessLevelOuter = 11,
        TessLevelInner = 12,
        TessCoord = 13,
        PatchVertices = 14,
        FragCoord = 15,
        PointCoord = 16,
        FrontFacing = 17,
        SampleId = 18,
        SamplePosition = 19,
        SampleMask = 20,
        FragColor = 21,
        FragDepth = 22,
        HelperInvocation = 23,
        NumWorkgroups = 24,
        WorkgroupSize = 25,
        WorkgroupId = 26,
        LocalInvocationId = 27,
        GlobalInvocationId = 28,
        LocalInvocationIndex = 29,
        WorkDim = 30,
        GlobalSize = 31,
        EnqueuedWorkgroupSize = 32,
        GlobalOffset = 33,
        GlobalLinearId = 34,
        WorkgroupLinearId = 35,
        SubgroupSize = 36,
        SubgroupMaxSize = 37,
        NumSubgroups = 38,
        NumEnqueuedSubgroups = 39,
        SubgroupId = 40,
        SubgroupLocalInvocationId = 41,
    }
}

operand_enum! {
    /// Flattening priority for a structured selection.
    pub enum SelectionControl {
        NoControl = 0,
        /// Strong request to remove the flow control.
        Flatten = 1,
        /// Strong request to keep the selection as flow control.
        DontFlatten = 2,
    }
}

operand_enum! {
    /// Unrolling priority for a structured loop.
    pub enum LoopControl {
        NoControl = 0,
        /// Strong request to unroll.
        Unroll = 1,
        /// Strong request to keep the loop.
        DontUnroll = 2,
    }
}

operand_enum! {
    /// Access permission of sampler and pipe type objects.
    pub enum AccessQualifier {
        ReadOnly = 0,
        WriteOnly = 1,
        ReadWrite = 2,
    }
}

operand_enum! {
    /// Scope an operation applies to.
    ///
    /// Group operations additionally restrict their scope to `Workgroup` or
    /// `Subgroup`; that constraint lives with the records.
    pub enum ExecutionScope {
        /// Everything executing on all devices in the system.
        CrossDevice = 0,
        /// Everything executing on the device of this invocation.
        Device = 1,
        /// All invocations of the invoking workgroup.
        Workgroup = 2,
        /// All invocations of the currently executing subgroup.
        Subgroup = 3,
    }
}

operand_enum! {
    /// Class of a workgroup or subgroup reduction.
    pub enum GroupOperation {
        Reduce = 0,
        InclusiveScan = 1,
        ExclusiveScan = 2,
    }
}

operand_enum! {
    /// When an enqueued child kernel may begin execution.
    pub enum KernelEnqueueFlags {
        /// No need to wait for the parent kernel.
        NoWait = 0,
        /// Wait for all work items of the parent kernel.
        WaitKernel = 1,
        /// Wait for the enqueuing workgroup only.
        WaitWorkGroup = 2,
    }
}

operand_enum! {
    /// Profiling information captured for an event.
    pub enum KernelProfilingInfo {
        CmdExecTime = 1,
    }
}

operand_enum! {
    /// Linkage attached to a function or module-scope variable.
    pub enum LinkageType {
        /// Accessible by other modules.
        Export = 0,
        /// Declares a global identifier that lives in another module.
        Import = 1,
    }
}

operand_enum! {
    /// Rounding mode attached to a floating-point conversion.
    pub enum RoundingMode {
        /// Round to nearest even.
        Rte = 0,
        /// Round towards zero.
        Rtz = 1,
        /// Round towards positive infinity.
        Rtp = 2,
        /// Round towards negative infinity.
        Rtn = 3,
    }
}

operand_mask! {
    /// Fast-math relaxations for floating-point operations. An empty mask is
    /// a valid "no relaxations" state.
    pub struct FastMathMode: allow_empty = true {
        /// Assume parameters and result are not infinite.
        const NOT_INF = 2;
        /// Treat the sign of a zero as insignificant.
        const NSZ = 4;
        /// Allow a reciprocal instead of a division.
        const ALLOW_RECIP = 8;
        /// Allow algebraic transformations; implies all the others.
        const FAST = 16;
    }
}

operand_mask! {
    /// Optimization hints on a function definition.
    pub struct FunctionControl: allow_empty = false {
        /// Strong request to inline.
        const INLINE = 1;
        /// Strong request not to inline.
        const DONT_INLINE = 2;
        /// No side effects, but may read global memory.
        const PURE = 4;
        /// No side effects and no global memory access.
        const CONST = 8;
    }
}

operand_mask! {
    /// Memory classification and ordering semantics.
    pub struct MemorySemantics: allow_empty = false {
        const RELAXED = 1;
        /// Sequentially consistent with respect to this invocation.
        const SEQUENTIALLY_CONSISTENT = 2;
        /// Later operations in program order execute after this one.
        const ACQUIRE = 4;
        /// Earlier operations in program order execute before this one.
        const RELEASE = 8;
        /// Constrain only uniform-storage accesses.
        const UNIFORM_MEMORY = 16;
        /// Constrain only this invocation's subgroup memory.
        const SUBGROUP_MEMORY = 32;
        /// Constrain only this invocation's local workgroup memory.
        const WORKGROUP_LOCAL_MEMORY = 64;
        /// Constrain only this invocation's global workgroup memory.
        const WORKGROUP_GLOBAL_MEMORY = 128;
        /// Constrain only atomic-counter-storage accesses.
        const ATOMIC_COUNTER_MEMORY = 256;
        /// Constrain only image accesses.
        const IMAGE_MEMORY = 512;
    }
}

operand_mask! {
    /// Semantics of a single memory access.
    pub struct MemoryAccess: allow_empty = false {
        /// The access cannot be optimized away.
        const VOLATILE = 1;
        /// The access has a known alignment, given in the next operand.
        const ALIGNED = 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidOperand, OperandKind};
    use rstest::rstest;
    use strum::IntoEnumIterator;

    // Every declared value must round-trip through the validity predicate;
    // the value one past the family's maximum must fail with the family's
    // own error kind.
    macro_rules! assert_enum_bounds {
        ($Family:ident) => {{
            let mut max = 0;
            for variant in $Family::iter() {
                let raw = variant as u32;
                assert_eq!($Family::try_from(raw), Ok(variant));
                max = max.max(raw);
            }
            assert_eq!(
                $Family::try_from(max + 1),
                Err(InvalidOperand(OperandKind::$Family))
            );
        }};
    }

    #[test]
    fn sequential_families_validate_their_declared_sets() {
        assert_enum_bounds!(SourceLanguage);
        assert_enum_bounds!(ExecutionModel);
        assert_enum_bounds!(AddressingModel);
        assert_enum_bounds!(MemoryModel);
        assert_enum_bounds!(ExecutionMode);
        assert_enum_bounds!(StorageClass);
        assert_enum_bounds!(Dimensionality);
        assert_enum_bounds!(FunctionParameterAttribute);
        assert_enum_bounds!(Decoration);
        assert_enum_bounds!(BuiltIn);
        assert_enum_bounds!(SelectionControl);
        assert_enum_bounds!(LoopControl);
        assert_enum_bounds!(AccessQualifier);
        assert_enum_bounds!(ExecutionScope);
        assert_enum_bounds!(GroupOperation);
        assert_enum_bounds!(KernelEnqueueFlags);
        assert_enum_bounds!(LinkageType);
        assert_enum_bounds!(RoundingMode);
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(4, true)]
    #[case(6, true)]
    #[case(8, true)]
    #[case(9, false)]
    #[case(10, false)]
    fn sampler_addressing_is_even_only(#[case] raw: u32, #[case] ok: bool) {
        assert_eq!(SamplerAddressingMode::try_from(raw).is_ok(), ok);
    }

    #[rstest]
    #[case(16, true)]
    #[case(32, true)]
    #[case(0, false)]
    #[case(17, false)]
    #[case(33, false)]
    fn sampler_filter_declares_two_values(#[case] raw: u32, #[case] ok: bool) {
        assert_eq!(SamplerFilterMode::try_from(raw).is_ok(), ok);
    }

    #[test]
    fn kernel_profiling_info_excludes_zero() {
        assert_eq!(KernelProfilingInfo::try_from(1), Ok(KernelProfilingInfo::CmdExecTime));
        assert!(KernelProfilingInfo::try_from(0).is_err());
        assert!(KernelProfilingInfo::try_from(2).is_err());
    }

    #[test]
    fn masks_accept_any_combination_of_declared_bits() {
        assert!(FastMathMode::empty().verify().is_ok());
        assert!(FastMathMode::all().verify().is_ok());
        assert!(FastMathMode::from_bits_retain(1).verify().is_err());

        assert!(FunctionControl::empty().verify().is_err());
        assert!(FunctionControl::all().verify().is_ok());
        assert!((FunctionControl::INLINE | FunctionControl::PURE).verify().is_ok());
        assert!(FunctionControl::from_bits_retain(16).verify().is_err());

        assert!(MemorySemantics::empty().verify().is_err());
        assert!(MemorySemantics::all().verify().is_ok());
        assert!(MemorySemantics::from_bits_retain(1024).verify().is_err());

        assert!(MemoryAccess::empty().verify().is_err());
        assert!((MemoryAccess::VOLATILE | MemoryAccess::ALIGNED).verify().is_ok());
        assert!(MemoryAccess::from_bits_retain(4).verify().is_err());
    }

    #[test]
    fn mask_errors_carry_their_family() {
        assert_eq!(
            FunctionControl::empty().verify(),
            Err(InvalidOperand(OperandKind::FunctionControl))
        );
        assert_eq!(
            MemoryAccess::from_bits_retain(4).verify(),
            Err(InvalidOperand(OperandKind::MemoryAccess))
        );
    }
}
