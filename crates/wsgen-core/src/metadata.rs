//! Type metadata model
//!
//! These are read-only descriptions of already-resolved stub and data types.
//! The generators only ever reason over this model; they never build an AST
//! of the output.

use crate::classify::{PrimitiveKind, STRING_TYPE};
use crate::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the JVM `void` pseudo-type
pub const VOID_TYPE: &str = "void";

/// Reference to a type from a field, parameter or return position
///
/// The textual form is the qualified name, with one `[]` suffix per array
/// dimension, e.g. `com.example.User[]` or `int[][]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A non-array type identified by its qualified name
    Named(String),
    /// An array of the component type
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Reference a non-array type by qualified name
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Reference an array of `component`
    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// The `void` pseudo-type
    pub fn void() -> Self {
        TypeRef::named(VOID_TYPE)
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        TypeRef::named(STRING_TYPE)
    }

    /// A primitive type such as `int`
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::named(kind.name())
    }

    /// The boxed counterpart of a primitive, such as `java.lang.Integer`
    pub fn boxed(kind: PrimitiveKind) -> Self {
        TypeRef::named(kind.boxed_name())
    }

    /// Parse the textual form of a type reference
    pub fn parse(text: &str) -> GenerationResult<Self> {
        let trimmed = text.trim();
        let mut base = trimmed;
        let mut dimensions = 0usize;
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped.trim_end();
            dimensions += 1;
        }

        if !is_valid_qualified_name(base) {
            return Err(GenerationError::InvalidTypeName(text.to_string()));
        }

        let mut ty = TypeRef::named(base);
        for _ in 0..dimensions {
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    /// Whether this is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    /// Whether this is the `void` pseudo-type
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Named(name) if name == VOID_TYPE)
    }

    /// Component type of an array, `None` for non-arrays
    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            TypeRef::Named(_) => None,
        }
    }

    /// Innermost non-array type together with the number of array dimensions
    pub fn innermost(&self) -> (&TypeRef, usize) {
        let mut ty = self;
        let mut dimensions = 0;
        while let TypeRef::Array(component) = ty {
            ty = component;
            dimensions += 1;
        }
        (ty, dimensions)
    }

    /// Qualified name of the innermost element type
    pub fn qualified_name(&self) -> &str {
        match self.innermost().0 {
            TypeRef::Named(name) => name,
            TypeRef::Array(_) => "",
        }
    }

    /// Unqualified name, keeping array suffixes (`User[]`)
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Named(name) => match name.rsplit_once('.') {
                Some((_, simple)) => simple.to_string(),
                None => name.clone(),
            },
            TypeRef::Array(component) => format!("{}[]", component.simple_name()),
        }
    }

    /// Enclosing namespace of the innermost element type, empty if none
    pub fn namespace(&self) -> &str {
        match self.qualified_name().rsplit_once('.') {
            Some((namespace, _)) => namespace,
            None => "",
        }
    }
}

fn is_valid_qualified_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::Array(component) => write!(f, "{component}[]"),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeRef::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

impl std::str::FromStr for TypeRef {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeRef::parse(s)
    }
}

/// JVM member modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Synchronized,
    Volatile,
    Transient,
    Native,
    Abstract,
}

/// Visibility derived from a modifier set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Derive visibility from modifiers
    ///
    /// `Private` and `Protected` require the set to be exactly that single
    /// modifier; anything else, including `private static`, is `Public`.
    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        let only = |target: Modifier| {
            !modifiers.is_empty() && modifiers.iter().all(|modifier| *modifier == target)
        };
        if only(Modifier::Private) {
            Visibility::Private
        } else if only(Modifier::Protected) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    /// Source keyword for this visibility
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_modifiers(&self.modifiers)
    }
}

/// A declared method
///
/// `parameter_names` is whatever the upstream collaborator could recover;
/// `None` means the names were not available at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameter_types: Vec<TypeRef>,
    #[serde(default)]
    pub parameter_names: Option<Vec<String>>,
    #[serde(default = "default_method_modifiers")]
    pub modifiers: Vec<Modifier>,
}

fn default_method_modifiers() -> Vec<Modifier> {
    vec![Modifier::Public]
}

impl MethodDescriptor {
    /// Create a public method with no parameters
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameter_types: Vec::new(),
            parameter_names: Some(Vec::new()),
            modifiers: default_method_modifiers(),
        }
    }

    /// Append a named parameter
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameter_types.push(ty);
        self.parameter_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Drop recovered parameter names
    pub fn without_parameter_names(mut self) -> Self {
        self.parameter_names = None;
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_modifiers(&self.modifiers)
    }
}

/// A cached XML qualified name recorded on a stub type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub namespace_uri: String,
    pub local_part: String,
}

impl QualifiedName {
    pub fn new(namespace_uri: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
        }
    }
}

/// Registry entry for an introspectable type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Qualified names of declared supertypes, direct or inherited
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Cached wire names, in the order the upstream collaborator recorded them
    #[serde(default)]
    pub qualified_names: Vec<QualifiedName>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            supertypes: Vec::new(),
            qualified_names: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn with_qualified_name(mut self, name: QualifiedName) -> Self {
        self.qualified_names.push(name);
        self
    }

    /// `namespace.name`, or just `name` in the root namespace
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// A type reference pointing at this descriptor
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::named(self.qualified_name())
    }

    /// Whether a method with this exact name is declared
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|method| method.name == name)
    }

    /// Whether this type is, or is declared to extend, `marker`
    pub fn is_assignable_to(&self, marker: &str) -> bool {
        self.qualified_name() == marker || self.supertypes.iter().any(|s| s == marker)
    }
}

/// Operation name as declared by the service description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationMetadata {
    pub name: String,
}

impl OperationMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Type descriptors keyed by qualified name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning any previous entry with the same name
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(descriptor.qualified_name(), descriptor)
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(qualified_name)
    }

    /// Look up a descriptor that must exist
    pub fn require(&self, qualified_name: &str) -> GenerationResult<&TypeDescriptor> {
        self.get(qualified_name)
            .ok_or_else(|| GenerationError::UnknownType(qualified_name.to_string()))
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = TypeRegistry::new();
        for descriptor in iter {
            registry.insert(descriptor);
        }
        registry
    }
}
