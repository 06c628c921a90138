use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A course as declared in a `Curso` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Curso {
    pub codigo: String,
    pub nombre: String,
    pub creditos: u32,
    pub semestre: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligatorio: Option<bool>,
    pub prerrequisitos: Vec<String>,
}

impl Curso {
    pub fn new(codigo: impl Into<String>, semestre: u32) -> Self {
        Self {
            codigo: codigo.into(),
            nombre: String::new(),
            creditos: 0,
            semestre,
            descripcion: None,
            area: None,
            obligatorio: None,
            prerrequisitos: Vec::new(),
        }
    }
}

/// A parsed `Semestre: N { ... }` block and the courses declared in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterDef {
    pub numero: u32,
    pub line: usize,
    pub cursos: Vec<Curso>,
}

/// A parsed `Carrera: "name" [ ... ]` construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDef {
    pub carrera: String,
    pub semestres: Vec<SemesterDef>,
}

/// Top-level constructs, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PensumItem {
    Program(ProgramDef),
    Semester(SemesterDef),
}

/// Record of one `Semestre` block, in parse order. Repeated numbers get
/// separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemesterBlock {
    pub numero: u32,
    pub line: usize,
}

/// Index of a course in [`Pensum`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(usize);

/// A whole curriculum.
///
/// Courses are owned by a single arena. The per-semester lists and the
/// by-code map hold [`CourseId`]s into it. Semesters keep the order in which
/// their numbers were first seen; the by-code map keeps last-write-wins
/// semantics, so a repeated code points at the most recent course while every
/// semester list still holds what was appended to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pensum {
    carrera: String,
    arena: Vec<Curso>,
    semestres: IndexMap<u32, Vec<CourseId>>,
    cursos: IndexMap<String, CourseId>,
    bloques: Vec<SemesterBlock>,
}

impl Pensum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds parsed constructs into a curriculum, in order.
    pub fn from_items(items: Vec<PensumItem>) -> Self {
        let mut pensum = Self::new();
        for item in items {
            match item {
                PensumItem::Program(program) => {
                    pensum.set_carrera(program.carrera);
                    for semester in program.semestres {
                        pensum.add_semester(semester);
                    }
                }
                PensumItem::Semester(semester) => pensum.add_semester(semester),
            }
        }
        pensum
    }

    pub fn set_carrera(&mut self, carrera: impl Into<String>) {
        self.carrera = carrera.into();
    }

    pub fn add_semester(&mut self, semester: SemesterDef) {
        self.open_semester(semester.numero, semester.line);
        for curso in semester.cursos {
            self.add_course(curso);
        }
    }

    /// Records a `Semestre` block and makes sure its number has a course list.
    pub fn open_semester(&mut self, numero: u32, line: usize) {
        self.bloques.push(SemesterBlock { numero, line });
        self.semestres.entry(numero).or_default();
    }

    /// Stores `curso` in the arena, points its code at it (replacing any
    /// earlier course with that code) and appends it to its semester.
    pub fn add_course(&mut self, curso: Curso) -> CourseId {
        let id = CourseId(self.arena.len());
        let semestre = curso.semestre;
        self.cursos.insert(curso.codigo.clone(), id);
        self.arena.push(curso);
        self.semestres.entry(semestre).or_default().push(id);
        id
    }

    pub fn carrera(&self) -> &str {
        &self.carrera
    }

    pub fn get(&self, id: CourseId) -> Option<&Curso> {
        self.arena.get(id.0)
    }

    /// Course currently registered under `codigo`.
    pub fn curso(&self, codigo: &str) -> Option<&Curso> {
        self.cursos.get(codigo).and_then(|id| self.get(*id))
    }

    /// Courses by code, in first-registration order of each code.
    pub fn cursos(&self) -> impl Iterator<Item = (&str, &Curso)> {
        self.cursos
            .iter()
            .filter_map(move |(codigo, id)| self.get(*id).map(|curso| (codigo.as_str(), curso)))
    }

    /// Semester numbers in first-seen order.
    pub fn semester_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.semestres.keys().copied()
    }

    /// Courses appended to semester `numero`, in declaration order.
    pub fn semester(&self, numero: u32) -> Option<Vec<&Curso>> {
        self.semestres
            .get(&numero)
            .map(|ids| ids.iter().filter_map(|id| self.get(*id)).collect())
    }

    pub fn semestres(&self) -> impl Iterator<Item = (u32, Vec<&Curso>)> {
        self.semestres.iter().map(move |(numero, ids)| {
            (
                *numero,
                ids.iter().filter_map(|id| self.get(*id)).collect(),
            )
        })
    }

    pub fn bloques(&self) -> &[SemesterBlock] {
        &self.bloques
    }

    pub fn semester_count(&self) -> usize {
        self.semestres.len()
    }

    /// Number of distinct course codes.
    pub fn course_count(&self) -> usize {
        self.cursos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carrera.is_empty() && self.semestres.is_empty()
    }
}

#[derive(Serialize)]
struct SemesterView<'a> {
    numero: u32,
    cursos: Vec<&'a Curso>,
}

#[derive(Serialize)]
struct PensumView<'a> {
    carrera: &'a str,
    semestres: Vec<SemesterView<'a>>,
    cursos: IndexMap<&'a str, &'a Curso>,
    bloques: &'a [SemesterBlock],
}

impl Serialize for Pensum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PensumView {
            carrera: &self.carrera,
            semestres: self
                .semestres()
                .map(|(numero, cursos)| SemesterView { numero, cursos })
                .collect(),
            cursos: self.cursos().collect(),
            bloques: &self.bloques,
        }
        .serialize(serializer)
    }
}
