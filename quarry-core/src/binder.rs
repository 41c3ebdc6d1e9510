use crate::{AsValue, Result, RowLabeled, RowNames, Value, ValueKind, translate_column_name};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
    sync::Arc,
};

type Assign<E> = Box<dyn Fn(&mut E, Value) -> Result<()> + Send + Sync>;

/// Assignment of one entity attribute.
pub struct Setter<E> {
    name: Cow<'static, str>,
    key: String,
    kind: ValueKind,
    assign: Assign<E>,
}

impl<E> Setter<E> {
    /// Attribute name as registered.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Translated name matched against the columns.
    pub fn key(&self) -> &str {
        &self.key
    }
    /// Kind of value the attribute natively holds.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
    /// Coerce `value` to the attribute type and store it.
    pub fn assign(&self, entity: &mut E, value: Value) -> Result<()> {
        (self.assign)(entity, value)
    }
}

impl<E> Debug for Setter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Column to attribute mapping table of an entity type, built once and reused for every row.
///
/// A column matches an attribute when both names are equal after removing the
/// underscores and ignoring the case (`cust_code` matches `custCode` and
/// `cust_code`). The first registered attribute wins.
///
/// ```
/// use quarry_core::{Binder, RowLabeled, Value};
/// #[derive(Default)]
/// struct Customer {
///     cust_code: String,
///     grade: i32,
/// }
/// let binder = Binder::<Customer>::new()
///     .setter("cust_code", |e: &mut Customer, v: String| e.cust_code = v)
///     .setter("grade", |e: &mut Customer, v: i32| e.grade = v);
/// let row = RowLabeled::new(
///     ["CUST_CODE".to_string(), "grade".to_string()].into(),
///     [Value::Varchar(Some("C00013".into())), Value::Int64(Some(2))].into(),
/// );
/// let customer = binder.bind(&row);
/// assert_eq!(customer.cust_code, "C00013");
/// assert_eq!(customer.grade, 2);
/// ```
pub struct Binder<E> {
    setters: Vec<Setter<E>>,
}

impl<E> Binder<E> {
    pub fn new() -> Self {
        Self {
            setters: Vec::new(),
        }
    }

    /// Register an attribute, `assign` receives the cell already coerced to `T`.
    pub fn setter<T, F>(mut self, name: impl Into<Cow<'static, str>>, assign: F) -> Self
    where
        T: AsValue + 'static,
        F: Fn(&mut E, T) + Send + Sync + 'static,
    {
        let name = name.into();
        self.setters.push(Setter {
            key: translate_column_name(&name),
            name,
            kind: T::as_empty_value().kind(),
            assign: Box::new(move |entity, value| {
                assign(entity, T::try_from_value(value)?);
                Ok(())
            }),
        });
        self
    }

    pub fn setters(&self) -> &[Setter<E>] {
        &self.setters
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }

    /// Index of the setter matching `column`.
    pub fn resolve(&self, column: &str) -> Option<usize> {
        let key = translate_column_name(column);
        self.setters.iter().position(|v| v.key == key)
    }

    /// Resolve every column once, the plan is valid for all the rows sharing these labels.
    pub fn plan(&self, labels: &RowNames) -> BindPlan {
        BindPlan {
            labels: labels.clone(),
            targets: labels.iter().map(|v| self.resolve(v)).collect(),
        }
    }

    /// Fresh entity from one row.
    pub fn bind(&self, row: &RowLabeled) -> E
    where
        E: Default,
    {
        self.bind_planned(&self.plan(&row.labels), row)
    }

    /// Fresh entity from one row using a plan previously computed from its labels.
    ///
    /// Null cells, columns without attribute and cells that cannot be coerced
    /// to the attribute type are skipped, leaving the attribute to its default.
    pub fn bind_planned(&self, plan: &BindPlan, row: &RowLabeled) -> E
    where
        E: Default,
    {
        if !plan.matches(&row.labels) {
            return self.bind(row);
        }
        let mut entity = E::default();
        let cells = row.labels.iter().zip(row.values.iter());
        for ((label, value), target) in cells.zip(plan.targets.iter()) {
            let Some(setter) = target.and_then(|i| self.setters.get(i)) else {
                log::trace!("Skipping column `{label}`, no attribute matches it");
                continue;
            };
            if value.is_null() {
                log::trace!("Skipping column `{label}`, the value is null");
                continue;
            }
            if let Err(e) = setter.assign(&mut entity, value.clone()) {
                log::warn!(
                    "Skipping column `{label}`, cannot assign {value:?} to attribute `{}` of kind {}: {e:#}",
                    setter.name,
                    setter.kind,
                );
            }
        }
        entity
    }
}

impl<E> Default for Binder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Debug for Binder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("setters", &self.setters)
            .finish()
    }
}

/// Setter index for each column of a row shape.
#[derive(Debug, Clone)]
pub struct BindPlan {
    labels: RowNames,
    targets: Box<[Option<usize>]>,
}

impl BindPlan {
    pub fn labels(&self) -> &RowNames {
        &self.labels
    }
    /// Setter index of each column, `None` for the skipped ones.
    pub fn targets(&self) -> &[Option<usize>] {
        &self.targets
    }
    pub fn matches(&self, labels: &RowNames) -> bool {
        Arc::ptr_eq(&self.labels, labels) || self.labels == *labels
    }
}
