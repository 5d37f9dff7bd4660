//! Instruction set generator.

/// Generates the instruction set from instruction handler signatures.
///
/// For every `fn name(&mut self, arg: Type, ...) { ... }` definition this produces
///
/// - a variant `Instruction::name(Type, ...)` (a unit variant when there are no operands),
/// - the canonical text form `name arg ...` via `Display`,
/// - an emitter `Writer::name(arg, ...) -> CodeAddress` returning the position of the written instruction,
/// - a handler `VM::exec_name(arg, ...)` running the body, plus the `VM::exec_instruction` dispatcher.
///
/// Handler bodies may use `?` on `Result<_, RuntimeErrorKind>`.
macro_rules! impl_vm {
    (
        $(
            $( #[ $attr:meta ] )*
            fn $name:ident ( & mut $self:ident $( , $( $arg_name:ident : $arg_type:ty ),+ )? )
            $code:block
        )+
    ) => {

        /// Virtual machine instructions. Generated from the handler signatures defined via the `impl_vm!` macro.
        ///
        /// Operands appear in the same order as in the canonical text form, e.g. `Instruction::sto(0, 2)`
        /// is written as `sto 0 2`.
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum Instruction {
            $(
                $( #[ $attr ] )*
                $name $( ( $( $arg_type ),+ ) )?,
            )+
        }

        impl Instruction {
            /// Returns the mnemonic of the instruction.
            pub fn mnemonic(self: &Self) -> &'static str {
                match self {
                    $( Instruction::$name { .. } => stringify!($name), )+
                }
            }
        }

        impl ::std::fmt::Display for Instruction {
            fn fmt(self: &Self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match *self {
                    $(
                        Instruction::$name $( ( $( $arg_name ),+ ) )? => {
                            f.write_str(stringify!($name))?;
                            $( $( write!(f, " {}", $arg_name)?; )+ )?
                            Ok(())
                        }
                    )+
                }
            }
        }

        /// Instruction emitters. Generated from the handler signatures defined via the `impl_vm!` macro.
        #[cfg(feature="compiler")]
        impl crate::bytecode::Writer {
            $(
                $( #[ $attr ] )*
                pub fn $name(self: &mut Self $( , $( $arg_name: $arg_type ),+ )? ) -> crate::CodeAddress {
                    self.write(Instruction::$name $( ( $( $arg_name ),+ ) )? )
                }
            )+
        }

        ::paste::paste! {
            /// Instruction handlers. Generated from the handler signatures defined via the `impl_vm!` macro.
            #[cfg(feature="runtime")]
            impl<O> crate::bytecode::runtime::VM<O> where O: crate::bytecode::runtime::Output {
                $(
                    $( #[ $attr ] )*
                    #[cfg_attr(not(debug_assertions), inline(always))]
                    fn [<exec_ $name>]( $self: &mut Self $( , $( $arg_name: $arg_type ),+ )? ) -> Result<(), crate::bytecode::runtime::RuntimeErrorKind> {
                        $code
                        Ok(())
                    }
                )+

                /// Executes a single, already fetched instruction.
                pub(crate) fn exec_instruction(self: &mut Self, instruction: Instruction) -> Result<(), crate::bytecode::runtime::RuntimeErrorKind> {
                    match instruction {
                        $(
                            Instruction::$name $( ( $( $arg_name ),+ ) )? => self.[<exec_ $name>]( $( $( $arg_name ),+ )? ),
                        )+
                    }
                }
            }
        }
    }
}
