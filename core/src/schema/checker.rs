use crate::errors::{ArgumentError, SchemaError};
use crate::schema::types::{CheckedArgs, OperationSpec};
use crate::types::ArgMap;
use crate::validation::{CheckOptions, Validator};
use indexmap::IndexMap;

/// **OPERATION SCHEMA**
///
/// Parameter name to validator, in declaration order, plus the checking
/// options. At most one parameter may be governed by a method validator; its
/// allow-lists are completed with every other declared parameter that no
/// allow-list mentions.
#[derive(Debug, Clone)]
pub struct OperationSchema {
    name: String,
    arguments: IndexMap<String, Validator>,
    method_key: Option<String>,
    options: CheckOptions,
}

/// Builder returned by [`OperationSchema::builder`].
#[derive(Debug, Clone)]
pub struct OperationSchemaBuilder {
    name: String,
    arguments: IndexMap<String, Validator>,
    options: CheckOptions,
}

impl OperationSchemaBuilder {
    /// Declare a parameter. Redeclaring a name replaces its validator.
    pub fn argument(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.arguments.insert(name.into(), validator);
        self
    }

    /// Reject undeclared arguments.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// **BUILD**
    pub fn build(mut self) -> Result<OperationSchema, SchemaError> {
        let mut method_key: Option<String> = None;
        for (key, validator) in &self.arguments {
            let Some(method) = validator.as_method() else {
                continue;
            };
            if let Some(first) = &method_key {
                return Err(SchemaError::DuplicateMethod {
                    operation: self.name.clone(),
                    first: first.clone(),
                    second: key.clone(),
                });
            }
            if method.method_name() != key.as_str() {
                return Err(SchemaError::MethodKeyMismatch {
                    key: key.clone(),
                    method_name: method.method_name().to_string(),
                });
            }
            method_key = Some(key.clone());
        }

        if let Some(key) = &method_key {
            let shared: Vec<String> = self
                .arguments
                .keys()
                .filter(|name| *name != key)
                .cloned()
                .collect();
            if let Some(method) = self
                .arguments
                .get_mut(key)
                .and_then(Validator::as_method_mut)
            {
                method.add_unspecified_allowed_args(&shared);
            }
        }

        log::debug!(
            "Built schema \"{}\" with {} argument(s), method key {:?}",
            self.name,
            self.arguments.len(),
            method_key
        );
        Ok(OperationSchema {
            name: self.name,
            arguments: self.arguments,
            method_key,
            options: self.options,
        })
    }
}

impl OperationSchema {
    /// **CONSTRUCTOR**
    pub fn builder(name: impl Into<String>) -> OperationSchemaBuilder {
        OperationSchemaBuilder {
            name: name.into(),
            arguments: IndexMap::new(),
            options: CheckOptions::default(),
        }
    }

    /// Load a schema from its JSON declaration, see [`OperationSpec`].
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let spec: OperationSpec = serde_json::from_str(json)?;
        Self::try_from(spec)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &IndexMap<String, Validator> {
        &self.arguments
    }

    pub fn validator(&self, name: &str) -> Option<&Validator> {
        self.arguments.get(name)
    }

    pub fn method_key(&self) -> Option<&str> {
        self.method_key.as_deref()
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// **CHECK ARGUMENTS**
    ///
    /// Resolves the method first, then checks every other parameter in
    /// declaration order against the residual arguments. Stops at the first
    /// violation.
    pub fn check(&self, args: ArgMap) -> Result<CheckedArgs, ArgumentError> {
        let (method, mut residual) = self.select(args)?;
        let mut values = ArgMap::new();
        for (name, validator) in self.parameters() {
            let value = validator.check(name, &mut residual)?;
            values.insert(name.clone(), value);
        }
        Ok(CheckedArgs { method, values })
    }

    /// **CHECK ALL ARGUMENTS**
    ///
    /// Like [`check`](Self::check) but collects the errors of all independent
    /// parameters. A rejected method still aborts the whole call.
    pub fn check_all(&self, args: ArgMap) -> Result<CheckedArgs, Vec<ArgumentError>> {
        let (method, mut residual) = self.select(args).map_err(|err| vec![err])?;
        let mut values = ArgMap::new();
        let mut errors = Vec::new();
        for (name, validator) in self.parameters() {
            match validator.check(name, &mut residual) {
                Ok(value) => {
                    values.insert(name.clone(), value);
                }
                Err(err) => errors.push(err),
            }
        }
        if errors.is_empty() {
            Ok(CheckedArgs { method, values })
        } else {
            log::debug!(
                "Schema \"{}\" rejected {} argument(s)",
                self.name,
                errors.len()
            );
            Err(errors)
        }
    }

    /// **SUBSUMPTION**
    ///
    /// True iff both schemas declare the same parameters and each of this
    /// schema's validators accepts the other's. A schema that accepts another
    /// can replace it without rejecting any call the other admits.
    pub fn accept(&self, other: &OperationSchema) -> bool {
        self.arguments.len() == other.arguments.len()
            && self.arguments.iter().all(|(name, validator)| {
                other
                    .arguments
                    .get(name)
                    .is_some_and(|theirs| validator.accept(theirs))
            })
    }

    fn parameters(&self) -> impl Iterator<Item = (&String, &Validator)> {
        let method_key = self.method_key.as_deref();
        self.arguments
            .iter()
            .filter(move |(name, _)| Some(name.as_str()) != method_key)
    }

    fn reject_unknown(&self, args: &ArgMap) -> Result<(), ArgumentError> {
        if !self.options.strict {
            return Ok(());
        }
        match args.keys().find(|key| !self.arguments.contains_key(*key)) {
            Some(unknown) => {
                let declared: Vec<&str> = self.arguments.keys().map(String::as_str).collect();
                Err(ArgumentError::invalid(
                    unknown.clone(),
                    format!(
                        "Unknown argument \"{}\" for \"{}\". Declared arguments: {}",
                        unknown,
                        self.name,
                        declared.join(", ")
                    ),
                ))
            }
            None => Ok(()),
        }
    }

    fn select(&self, args: ArgMap) -> Result<(Option<String>, ArgMap), ArgumentError> {
        self.reject_unknown(&args)?;
        let method = self
            .method_key
            .as_deref()
            .and_then(|key| Some((key, self.arguments.get(key)?.as_method()?)));
        match method {
            Some((key, validator)) => {
                let selection = validator.select(key, args)?;
                Ok((Some(selection.method), selection.residual))
            }
            None => Ok((None, args)),
        }
    }
}

impl TryFrom<OperationSpec> for OperationSchema {
    type Error = SchemaError;

    fn try_from(spec: OperationSpec) -> Result<Self, Self::Error> {
        let mut builder = OperationSchema::builder(spec.name).options(spec.options);
        for (name, validator) in spec.arguments {
            builder = builder.argument(name, validator);
        }
        builder.build()
    }
}

impl From<&OperationSchema> for OperationSpec {
    fn from(schema: &OperationSchema) -> Self {
        OperationSpec {
            name: schema.name.clone(),
            options: schema.options.clone(),
            arguments: schema.arguments.clone(),
        }
    }
}
