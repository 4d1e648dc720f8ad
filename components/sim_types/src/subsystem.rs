//! The fixed catalog of simulated runtime subsystems.
//!
//! Presentation layers key their activation and flash events to these
//! variants, and the chat assistant receives the selected subsystem's
//! catalog text as context.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A named subsystem of the simulated virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subsystem {
    /// Class loader subsystem
    ClassLoader,
    /// Method area (metaspace)
    MethodArea,
    /// The heap as a whole
    Heap,
    /// Young generation (Eden + survivors)
    HeapYoung,
    /// Old (tenured) generation
    HeapOld,
    /// Per-thread VM stack
    Stack,
    /// Program counter register
    PcRegister,
    /// Native method stack
    NativeStack,
    /// Execution engine (interpreter + JIT)
    ExecutionEngine,
    /// Garbage collector
    Collector,
}

/// Static descriptive metadata for a subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsystemInfo {
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Longer explanatory text shown on selection
    pub details: &'static str,
}

impl Subsystem {
    /// All subsystems, in presentation order.
    pub const ALL: [Subsystem; 10] = [
        Subsystem::ClassLoader,
        Subsystem::MethodArea,
        Subsystem::Heap,
        Subsystem::HeapYoung,
        Subsystem::HeapOld,
        Subsystem::Stack,
        Subsystem::PcRegister,
        Subsystem::NativeStack,
        Subsystem::ExecutionEngine,
        Subsystem::Collector,
    ];

    /// Catalog metadata for this subsystem.
    pub fn info(self) -> SubsystemInfo {
        match self {
            Subsystem::ClassLoader => SubsystemInfo {
                name: "Class Loader",
                description: "Loads .class files into memory",
                details: "The class loader subsystem reads class files from \
                          disk or the network, verifies them, and allocates \
                          memory for class variables. It is layered into the \
                          bootstrap, extension, and application loaders.",
            },
            Subsystem::MethodArea => SubsystemInfo {
                name: "Method Area",
                description: "Stores class metadata, constants, and statics",
                details: "The method area (metaspace in modern runtimes) \
                          holds loaded class metadata, the runtime constant \
                          pool, static variables, and JIT-compiled code.",
            },
            Subsystem::Heap => SubsystemInfo {
                name: "Heap",
                description: "Primary storage for object instances",
                details: "The largest memory region the VM manages, shared by \
                          all threads. Nearly every object instance is \
                          allocated here. The heap is divided into a young \
                          generation and an old generation.",
            },
            Subsystem::HeapYoung => SubsystemInfo {
                name: "Young Generation",
                description: "Where new objects are born (Eden + survivors)",
                details: "Contains the Eden space and two survivor spaces (S0 \
                          and S1). Most objects are created in Eden; when it \
                          fills up, a minor collection runs.",
            },
            Subsystem::HeapOld => SubsystemInfo {
                name: "Old Generation",
                description: "Holds long-lived objects",
                details: "Objects that survive enough collections are \
                          promoted here. When the old generation fills up, a \
                          major or full collection runs.",
            },
            Subsystem::Stack => SubsystemInfo {
                name: "VM Stack",
                description: "Thread-private stack of call frames",
                details: "Each method invocation pushes a stack frame holding \
                          local variables, the operand stack, dynamic links, \
                          and the return address; returning pops it.",
            },
            Subsystem::PcRegister => SubsystemInfo {
                name: "PC Register",
                description: "Bytecode address of the current instruction",
                details: "A small per-thread register tracking the address of \
                          the bytecode instruction being executed. Undefined \
                          while executing native methods.",
            },
            Subsystem::NativeStack => SubsystemInfo {
                name: "Native Stack",
                description: "Serves native method invocations",
                details: "Plays the same role as the VM stack but for native \
                          methods rather than bytecode methods.",
            },
            Subsystem::ExecutionEngine => SubsystemInfo {
                name: "Execution Engine",
                description: "Interprets or compiles bytecode to machine code",
                details: "Contains the interpreter and the JIT compiler, and \
                          hosts the garbage collector.",
            },
            Subsystem::Collector => SubsystemInfo {
                name: "Garbage Collector",
                description: "Automatically reclaims unreachable objects",
                details: "Part of the execution engine that reclaims \
                          unreachable heap objects. Classic algorithms \
                          include mark-sweep, copying, and mark-compact.",
            },
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for Subsystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classloader" | "class-loader" | "loader" => Ok(Subsystem::ClassLoader),
            "methodarea" | "method-area" | "metaspace" => Ok(Subsystem::MethodArea),
            "heap" => Ok(Subsystem::Heap),
            "young" | "heap-young" | "eden" => Ok(Subsystem::HeapYoung),
            "old" | "heap-old" | "tenured" => Ok(Subsystem::HeapOld),
            "stack" => Ok(Subsystem::Stack),
            "pc" | "pc-register" => Ok(Subsystem::PcRegister),
            "native" | "native-stack" => Ok(Subsystem::NativeStack),
            "engine" | "execution-engine" => Ok(Subsystem::ExecutionEngine),
            "gc" | "collector" => Ok(Subsystem::Collector),
            other => Err(format!("unknown subsystem: {}", other)),
        }
    }
}
