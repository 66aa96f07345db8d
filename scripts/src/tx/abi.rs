//! Encoding of string task arguments into contract calldata

use alloy::{
    dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier},
    json_abi::{JsonAbi, Param},
    primitives::Bytes,
};

use crate::errors::ScriptError;

/// Coerce each argument into the type of its matching parameter
pub fn coerce_args(params: &[Param], args: &[String]) -> Result<Vec<DynSolValue>, ScriptError> {
    if params.len() != args.len() {
        return Err(ScriptError::AbiEncoding(format!(
            "expected {} arguments, got {}",
            params.len(),
            args.len()
        )));
    }

    params
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty: DynSolType = param
                .resolve()
                .map_err(|e| ScriptError::AbiEncoding(e.to_string()))?;
            ty.coerce_str(arg).map_err(|e| {
                ScriptError::AbiEncoding(format!("invalid value for {}: {}", param.name, e))
            })
        })
        .collect()
}

/// Creation code followed by the encoded constructor arguments
pub fn encode_deploy_data(
    abi: &JsonAbi,
    bytecode: &Bytes,
    args: &[String],
) -> Result<Bytes, ScriptError> {
    let mut data = bytecode.to_vec();

    match abi.constructor() {
        Some(constructor) => {
            let values = coerce_args(&constructor.inputs, args)?;
            let encoded = constructor
                .abi_encode_input(&values)
                .map_err(|e| ScriptError::AbiEncoding(e.to_string()))?;
            data.extend_from_slice(&encoded);
        }
        None if !args.is_empty() => {
            return Err(ScriptError::AbiEncoding(format!(
                "contract has no constructor but {} arguments were given",
                args.len()
            )))
        }
        None => {}
    }

    Ok(Bytes::from(data))
}

/// Selector and encoded arguments of a call to `method`
///
/// Overloads are told apart by their number of inputs.
pub fn encode_call(abi: &JsonAbi, method: &str, args: &[String]) -> Result<Bytes, ScriptError> {
    let overloads = abi
        .function(method)
        .ok_or_else(|| ScriptError::AbiEncoding(format!("no function named {}", method)))?;

    let function = overloads
        .iter()
        .find(|f| f.inputs.len() == args.len())
        .ok_or_else(|| {
            ScriptError::AbiEncoding(format!(
                "no overload of {} takes {} arguments",
                method,
                args.len()
            ))
        })?;

    let values = coerce_args(&function.inputs, args)?;
    let encoded = function
        .abi_encode_input(&values)
        .map_err(|e| ScriptError::AbiEncoding(e.to_string()))?;

    Ok(Bytes::from(encoded))
}
